// src/github/parse.rs
// =============================================================================
// Turns a repository URL into a RepositoryReference.
//
// The rule: split on '/' and take the last two pieces.
// No scheme or host check, no ".git" stripping, no trailing-slash trimming.
//
//   "https://github.com/acme/widgets"  -> owner "acme",    name "widgets"
//   "https://github.com/acme/widgets/" -> owner "widgets", name ""
//   "acme/widgets"                     -> owner "acme",    name "widgets"
//   "widgets"                          -> error
// =============================================================================

use super::error::ParseError;
use super::types::RepositoryReference;

/// Takes the last two '/'-segments of `url` as (owner, name).
pub fn parse_repo_url(url: &str) -> Result<RepositoryReference, ParseError> {
    // rsplit walks the segments from the end, so the first item is the
    // repository name and the second is the owner
    let mut segments = url.rsplit('/');

    match (segments.next(), segments.next()) {
        (Some(name), Some(owner)) => Ok(RepositoryReference {
            owner: owner.to_string(),
            name: name.to_string(),
        }),
        _ => Err(ParseError::TooFewSegments(url.to_string())),
    }
}
