//! # svn-ignore CLI
//!
//! This is the binary entry point for the `svn-ignore` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Running the synchronizer and translating failures into user-friendly
//!   output and a non-zero exit status.
//!
//! The core logic is defined in the `lib.rs` library crate, ensuring that the
//! binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
