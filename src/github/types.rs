// src/github/types.rs
// =============================================================================
// Data types for talking to the GitHub contents API.
//
// - RepositoryReference: which repository we are snapshotting (owner + name)
// - DirectoryEntry: one item of the repository root listing
// - RepositoryInfo: metadata shown by the --info flag
//
// Rust concepts:
// - serde derive: Turn JSON into structs without writing a parser
// - #[serde(rename)]: Map JSON keys that are Rust keywords (like "type")
// - #[serde(other)]: Catch-all enum variant for values we don't know about
// =============================================================================

use serde::Deserialize;
use std::fmt;

/// Owner and repository name, taken verbatim from the input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// The "type" field of a listing entry.
//
// GitHub documents file, dir, symlink and submodule. Anything else still
// deserializes (as Other) so one odd entry can't break the whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
            EntryKind::Symlink => "symlink",
            EntryKind::Submodule => "submodule",
            EntryKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// One record of `GET /repos/{owner}/{repo}/contents`.
///
/// The API sends many more fields (sha, size, url, ...); serde ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// `null` for directories and submodules.
    #[serde(default)]
    pub download_url: Option<String>,
}

impl DirectoryEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// Response of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub html_url: String,
    pub default_branch: Option<String>,
}
