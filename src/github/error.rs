// src/github/error.rs
// =============================================================================
// Typed errors for the github module.
//
// main.rs downcasts its anyhow error to FetchError::ListingStatus to print
// the status code and stop quietly; every other failure exits 2.
// =============================================================================

use thiserror::Error;

/// The repository URL could not be split into owner and name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Repository URL needs at least two '/'-separated segments: {0}")]
    TooFewSegments(String),
}

/// Failures while talking to the contents API or the raw content endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The root listing answered with a non-success status.
    #[error("Failed to fetch repository contents: {0}")]
    ListingStatus(u16),

    #[error("Failed to fetch repository info: {0}")]
    InfoStatus(u16),

    #[error("Entry '{name}' is a file but has no download_url")]
    MissingDownloadUrl { name: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
