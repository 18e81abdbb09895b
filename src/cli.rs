// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes exactly one positional argument, the repository URL.
// Everything else is an optional flag with a default that reproduces the
// plain behavior (write to the current directory, talk to api.github.com,
// never time out).
//
// If the positional argument is missing or there are extra ones, clap prints
// a usage message and exits before main.rs runs any of our code, so no
// network request is ever made.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: Flags the user may leave out
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::github::DEFAULT_API_URL;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "github2file",
    version,
    about = "Flatten the top-level files of a GitHub repository into one text file",
    long_about = "github2file lists the root of a GitHub repository, downloads every file in it \
                  and writes them all into {repo}_content.txt, each one under a \"File: <name>\" \
                  header. Subdirectories are skipped. On success the output path is printed."
)]
pub struct Cli {
    /// GitHub repository URL (e.g., https://github.com/user/repo)
    ///
    /// The last two '/'-separated segments are used as owner and repository name
    pub repo_url: String,

    /// Directory to write the snapshot into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the GitHub contents API
    ///
    /// Point this at GitHub Enterprise or any service with the same API shape
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Per-request timeout in seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print repository metadata (owner, stars, ...) to stderr before downloading
    #[arg(long)]
    pub info: bool,
}
