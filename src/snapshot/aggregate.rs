// src/snapshot/aggregate.rs
// =============================================================================
// Builds the flattened text from a directory listing.
//
// How it works:
// 1. Walk the listing entries in the order GitHub returned them
// 2. Skip anything that isn't a file (directories, submodules, symlinks)
// 3. Download each file, one at a time, and wrap it in a ContentBlock
// 4. Render the blocks back to back into one String
//
// A download that gets any HTTP response counts, error pages included: the
// response body becomes the block. Only a request that fails outright
// (connection refused, undecodable body) stops the walk. Nothing has been
// written to disk at that point, so a failed run leaves no file.
//
// Rust concepts:
// - impl Display: Lets a ContentBlock be formatted with {} / to_string()
// - Iterators: filter + map over the listing
// - Sequential await in a for loop: one request in flight at a time
// =============================================================================

use std::fmt;
use tracing::{debug, info};

use crate::github::{DirectoryEntry, FetchError, GitHubClient};

/// One labeled file in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub name: String,
    pub body: String,
}

impl ContentBlock {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn header(&self) -> String {
        format!("File: {}", self.name)
    }
}

// Renders as "File: {name}\n\n{body}\n\n"
impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}\n\n", self.header(), self.body)
    }
}

/// Downloads every file entry of `entries`, in order.
///
/// Non-file entries are skipped without leaving a trace in the output.
/// A file entry with no `download_url` is an error, same as a failed request.
pub async fn collect_blocks(
    client: &GitHubClient,
    entries: &[DirectoryEntry],
) -> Result<Vec<ContentBlock>, FetchError> {
    let mut blocks = Vec::new();

    for entry in entries {
        if !entry.is_file() {
            debug!(name = %entry.name, kind = %entry.kind, "skipping non-file entry");
            continue;
        }

        let url = entry
            .download_url
            .as_deref()
            .ok_or_else(|| FetchError::MissingDownloadUrl {
                name: entry.name.clone(),
            })?;

        let body = client.fetch_raw(url).await?;
        debug!(name = %entry.name, bytes = body.len(), "fetched file");

        blocks.push(ContentBlock::new(entry.name.clone(), body));
    }

    info!(
        files = blocks.len(),
        skipped = entries.len() - blocks.len(),
        "collected repository files"
    );

    Ok(blocks)
}

/// Concatenates the rendered blocks. No header, footer or separator beyond
/// what each block already carries.
pub fn render(blocks: &[ContentBlock]) -> String {
    blocks.iter().map(ContentBlock::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::EntryKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn file(name: &str, url: String) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            kind: EntryKind::File,
            download_url: Some(url),
        }
    }

    fn dir(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            kind: EntryKind::Dir,
            download_url: None,
        }
    }

    async fn serve(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn test_block_format() {
        let block = ContentBlock::new("a.txt", "hello");
        assert_eq!(block.header(), "File: a.txt");
        assert_eq!(block.to_string(), "File: a.txt\n\nhello\n\n");
    }

    #[test]
    fn test_render_concatenates_in_order() {
        let blocks = vec![ContentBlock::new("b.txt", "two"), ContentBlock::new("a.txt", "one")];
        assert_eq!(render(&blocks), "File: b.txt\n\ntwo\n\nFile: a.txt\n\none\n\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[tokio::test]
    async fn test_files_kept_in_listing_order_and_dirs_skipped() {
        let server = MockServer::start().await;
        serve(&server, "/raw/z.txt", "last letter").await;
        serve(&server, "/raw/a.txt", "first letter").await;
        serve(&server, "/raw/m.txt", "").await;

        let base = server.uri();
        let entries = vec![
            file("z.txt", format!("{base}/raw/z.txt")),
            dir("src"),
            file("a.txt", format!("{base}/raw/a.txt")),
            DirectoryEntry {
                name: "vendor".to_string(),
                kind: EntryKind::Submodule,
                download_url: None,
            },
            file("m.txt", format!("{base}/raw/m.txt")),
            dir("docs"),
        ];

        let client = GitHubClient::new(&base, None).unwrap();
        let blocks = collect_blocks(&client, &entries).await.unwrap();

        let names: Vec<_> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["z.txt", "a.txt", "m.txt"]);
        assert_eq!(blocks[0].body, "last letter");
        assert_eq!(blocks[2].body, "");
        assert_eq!(
            render(&blocks),
            "File: z.txt\n\nlast letter\n\nFile: a.txt\n\nfirst letter\n\nFile: m.txt\n\n\n\n"
        );
    }

    #[tokio::test]
    async fn test_only_directories_yields_nothing() {
        let server = MockServer::start().await;
        let client = GitHubClient::new(&server.uri(), None).unwrap();

        let blocks = collect_blocks(&client, &[dir("a"), dir("b")]).await.unwrap();

        assert!(blocks.is_empty());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_page_is_kept_as_content() {
        let server = MockServer::start().await;
        serve(&server, "/raw/ok.txt", "fine").await;

        Mock::given(method("GET"))
            .and(path("/raw/missing.txt"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
            .expect(1)
            .mount(&server)
            .await;

        let base = server.uri();
        let entries = vec![
            file("ok.txt", format!("{base}/raw/ok.txt")),
            file("missing.txt", format!("{base}/raw/missing.txt")),
        ];

        let client = GitHubClient::new(&base, None).unwrap();
        let blocks = collect_blocks(&client, &entries).await.unwrap();

        assert_eq!(
            render(&blocks),
            "File: ok.txt\n\nfine\n\nFile: missing.txt\n\n404: Not Found\n\n"
        );
    }

    #[tokio::test]
    async fn test_failed_request_aborts() {
        let server = MockServer::start().await;
        serve(&server, "/raw/ok.txt", "fine").await;

        // Never requested: the walk stops at the unreachable file
        Mock::given(method("GET"))
            .and(path("/raw/after.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
            .expect(0)
            .mount(&server)
            .await;

        let base = server.uri();
        let entries = vec![
            file("ok.txt", format!("{base}/raw/ok.txt")),
            file("unreachable.txt", "http://127.0.0.1:1/unreachable.txt".to_string()),
            file("after.txt", format!("{base}/raw/after.txt")),
        ];

        let client = GitHubClient::new(&base, None).unwrap();
        let result = collect_blocks(&client, &entries).await;

        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn test_file_without_download_url_is_an_error() {
        let server = MockServer::start().await;
        let client = GitHubClient::new(&server.uri(), None).unwrap();
        let entries = vec![DirectoryEntry {
            name: "odd.txt".to_string(),
            kind: EntryKind::File,
            download_url: None,
        }];

        let result = collect_blocks(&client, &entries).await;

        match result {
            Err(FetchError::MissingDownloadUrl { name }) => assert_eq!(name, "odd.txt"),
            other => panic!("expected MissingDownloadUrl, got {other:?}"),
        }
    }
}
