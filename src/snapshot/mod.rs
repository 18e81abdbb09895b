// src/snapshot/mod.rs
// =============================================================================
// This module turns a repository listing into the snapshot file.
//
// Submodules:
// - aggregate: Downloads each file and joins them into labeled blocks
// - writer: Saves the joined text as "{repo}_content.txt"
//
// The top-level `run` ties the whole pipeline together:
//   listing -> blocks -> text -> file
// =============================================================================

mod aggregate;
mod writer;

use aggregate::{collect_blocks, render};
use writer::write_snapshot;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::github::{GitHubClient, RepositoryReference};

/// Runs the full pipeline for one repository and returns the written path.
///
/// Errors from the listing come back as `github::FetchError` inside the
/// anyhow error, so the caller can downcast and pick an exit code.
pub async fn run(
    client: &GitHubClient,
    repo: &RepositoryReference,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let entries = client.list_contents(repo).await?;
    info!(repo = %repo, entries = entries.len(), "fetched repository listing");

    let blocks = collect_blocks(client, &entries).await?;
    let content = render(&blocks);

    write_snapshot(output_dir, &repo.name, &content).await
}
