// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Currently implements:
// - Parsing repository URLs into owner/name (parse.rs)
// - Listing the repository root through the contents API (fetch.rs)
// - Downloading raw file contents from each entry's download_url (fetch.rs)
// - Fetching repository metadata for --info (fetch.rs)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod error;
mod fetch;
mod parse;
mod types;

// Re-export what the rest of the app needs so callers can write
// `github::GitHubClient` instead of `github::fetch::GitHubClient`
pub use error::FetchError;
pub use fetch::{GitHubClient, DEFAULT_API_URL};
pub use parse::parse_repo_url;
pub use types::{DirectoryEntry, EntryKind, RepositoryInfo, RepositoryReference};
