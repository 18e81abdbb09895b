// src/snapshot/writer.rs
// =============================================================================
// Writes the flattened text to "{repo}_content.txt".
//
// - Always UTF-8 (a Rust String can't be anything else)
// - An existing file with the same name is overwritten without asking
// - With an output directory, it is created first if it doesn't exist
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// The snapshot filename for a repository name.
pub fn output_file_name(repo_name: &str) -> String {
    format!("{}_content.txt", repo_name)
}

/// Writes `content` and returns the path it went to.
///
/// With `output_dir` of None the path is just the bare filename, relative to
/// the current directory.
pub async fn write_snapshot(
    output_dir: Option<&Path>,
    repo_name: &str,
    content: &str,
) -> Result<PathBuf> {
    let file_name = output_file_name(repo_name);

    let path = match output_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
            dir.join(file_name)
        }
        None => PathBuf::from(file_name),
    };

    tokio::fs::write(&path, content.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = content.len(), "wrote snapshot");
    Ok(path)
}
