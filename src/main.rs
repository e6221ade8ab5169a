//! # repo-picker CLI
//!
//! This is the binary entry point for the `repo-picker` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging.
//! - Running the repository-resolution pipeline and translating its outcome
//!   into terminal output and the process exit code.
//!
//! The core logic lives in the `lib.rs` library crate, keeping the binary a
//! thin wrapper around the reusable functionality.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
