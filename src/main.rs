// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (bad usage stops here)
// 2. Split the repository URL into owner/name
// 3. Optionally print repository metadata (--info)
// 4. Run the snapshot pipeline: list -> download -> join -> write
// 5. Print the output path and exit with the proper code
//
// Exit codes:
//   0 = snapshot written, or the repository listing request was refused
//       (the status code is printed and nothing else happens)
//   2 = any other error (or a usage error, which clap reports itself)
//
// stdout carries the output path or the refused-listing message. Logs and
// errors go to stderr.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod github;    // src/github/ - GitHub API access
mod snapshot;  // src/snapshot/ - building and writing the snapshot file

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use github::{FetchError, GitHubClient, RepositoryInfo};

#[tokio::main]
async fn main() {
    // Parsing first: a wrong argument count prints usage and exits here,
    // before any network request
    let cli = Cli::parse();

    init_tracing();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("\tCaused by: {}", cause);
            }
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr, filtered by RUST_LOG (e.g. RUST_LOG=github2file=debug)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "github2file=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Returns:
//   Ok(0) = snapshot written, or listing refused with a non-success status
//   Err   = anything else
async fn run(cli: Cli) -> Result<i32> {
    let repo = github::parse_repo_url(&cli.repo_url)?;
    let client = GitHubClient::new(cli.api_url.as_str(), cli.timeout.map(Duration::from_secs))?;

    if cli.info {
        let info = client.repo_info(&repo).await?;
        print_info(&info);
    }

    match snapshot::run(&client, &repo, cli.output_dir.as_deref()).await {
        Ok(path) => {
            println!("{}", path.display());
            Ok(0)
        }
        Err(e) => match e.downcast_ref::<FetchError>() {
            Some(FetchError::ListingStatus(_)) => {
                println!("{}", e);
                Ok(0)
            }
            _ => Err(e),
        },
    }
}

fn print_info(info: &RepositoryInfo) {
    eprintln!("📦 {}", info.full_name);
    eprintln!("   Name: {}", info.name);
    eprintln!("   Owner: {}", info.owner.login);
    eprintln!("   Stars: {}", info.stargazers_count);
    if let Some(description) = &info.description {
        eprintln!("   Description: {}", description);
    }
    if let Some(branch) = &info.default_branch {
        eprintln!("   Default branch: {}", branch);
    }
    eprintln!("   {}", info.html_url);
}
