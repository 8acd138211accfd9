//! Apply command implementation
//!
//! Builds the synchronizer from the command-line arguments, runs it against
//! the root directory with the `svn` binary as property store and tracker,
//! and prints a summary line.

use anyhow::Result;
use clap::{ArgAction, Args};
use std::path::PathBuf;

use svn_ignore::config::SyncOptions;
use svn_ignore::defaults::{DEFAULT_IGNORE_FILE, DEFAULT_SVN_BINARY};
use svn_ignore::output::{summary, OutputConfig};
use svn_ignore::report::LogReporter;
use svn_ignore::suggestions;
use svn_ignore::svn::SvnClient;
use svn_ignore::synchronizer::IgnoreSynchronizer;

/// Arguments for applying ignore files
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// The root directory. Default is the working directory.
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Do not apply ignore files to child directories
    #[arg(long = "no-recursive", action = ArgAction::SetFalse)]
    pub recursive: bool,

    /// Overwrite the existing ignore property instead of merging with it
    #[arg(long)]
    pub overwrite: bool,

    /// Turn verbose mode on
    #[arg(short, long)]
    pub verbose: bool,

    /// The ignore file to look for
    #[arg(
        long,
        value_name = "NAME",
        env = "SVN_IGNORE_FILE",
        default_value = DEFAULT_IGNORE_FILE
    )]
    pub ignore_file: String,

    /// The svn executable to run
    #[arg(
        long,
        value_name = "PATH",
        env = "SVN_IGNORE_SVN",
        default_value = DEFAULT_SVN_BINARY
    )]
    pub svn: String,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl ApplyArgs {
    /// Synchronization options selected by the flags
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions::new()
            .recursive(self.recursive)
            .overwrite(self.overwrite)
            .ignore_file(&self.ignore_file)
    }
}

/// Execute the apply command
pub fn execute(args: ApplyArgs, output: &OutputConfig) -> Result<()> {
    let client = SvnClient::with_program(&args.svn);
    let synchronizer = IgnoreSynchronizer::new(&client, &client, LogReporter, args.sync_options());

    let report = synchronizer
        .apply(&args.directory)
        .map_err(suggestions::for_error)?;

    if !args.quiet {
        println!("{}", summary(output, &report));
    }

    Ok(())
}
