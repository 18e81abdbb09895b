// src/github/fetch.rs
// =============================================================================
// This module talks to GitHub over HTTP.
//
// Three requests, all plain GETs:
// - {api}/repos/{owner}/{repo}/contents  -> the repository root listing
// - {download_url}                       -> raw bytes of one file
// - {api}/repos/{owner}/{repo}           -> repository metadata (--info)
//
// Every request is awaited before the next one starts. There are no
// retries, no pagination and no authentication.
//
// Rust concepts:
// - async functions: For network I/O
// - Result with our own error type: callers can match on what went wrong
// - The ? operator with #[from]: reqwest/serde errors convert automatically
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

use super::error::FetchError;
use super::types::{DirectoryEntry, RepositoryInfo, RepositoryReference};

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects API requests that don't identify themselves
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client bound to one API base URL.
///
/// The base URL is configurable so tests (or a GitHub-compatible service)
/// can stand in for api.github.com.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    /// Builds a client for `api_base`.
    ///
    /// `timeout` of None means a request may block forever.
    pub fn new(api_base: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// The listing endpoint for the repository root.
    pub fn listing_url(&self, repo: &RepositoryReference) -> String {
        format!("{}/repos/{}/{}/contents", self.api_base, repo.owner, repo.name)
    }

    fn repository_url(&self, repo: &RepositoryReference) -> String {
        format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.name)
    }

    fn api_get(&self, url: &str) -> RequestBuilder {
        self.client.get(url).header(ACCEPT, GITHUB_JSON)
    }

    /// Fetches the immediate children of the repository root.
    ///
    /// One request, first page only. A non-success status comes back as
    /// `FetchError::ListingStatus` carrying the numeric code.
    pub async fn list_contents(
        &self,
        repo: &RepositoryReference,
    ) -> Result<Vec<DirectoryEntry>, FetchError> {
        let url = self.listing_url(repo);
        debug!(%url, "requesting directory listing");

        let response = self.api_get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ListingStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let entries: Vec<DirectoryEntry> = serde_json::from_str(&body)?;
        debug!(count = entries.len(), "received directory listing");

        Ok(entries)
    }

    /// Downloads one file and decodes it as text.
    ///
    /// The status code is not checked: whatever body comes back (a 404 page
    /// included) is the file's content. Bytes that aren't valid in the
    /// response charset are replaced, so a binary file comes back as
    /// (mangled) text rather than an error.
    pub async fn fetch_raw(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        debug!(%url, status = response.status().as_u16(), "fetched raw content");

        Ok(response.text().await?)
    }

    /// Fetches the repository's metadata (name, owner, stars, ...).
    pub async fn repo_info(&self, repo: &RepositoryReference) -> Result<RepositoryInfo, FetchError> {
        let url = self.repository_url(repo);
        debug!(%url, "requesting repository info");

        let response = self.api_get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InfoStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Status codes are checked by hand rather than with error_for_status(),
//    so FetchError::ListingStatus carries the code as a plain u16
//    (main.rs prints "Failed to fetch repository contents: 404").
//
// 2. Bodies are read with text() and parsed with serde_json::from_str.
//    When GitHub answers with an object instead of an array, the serde
//    message ends up in FetchError::Decode.
// -----------------------------------------------------------------------------
