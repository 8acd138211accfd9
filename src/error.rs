//! # Error Handling
//!
//! This module defines the centralized error type for `svn-ignore`. It uses
//! the `thiserror` library to build one `Error` enum covering every way a
//! synchronization run can stop, with enough context (directory, operation,
//! underlying message) to diagnose the failure from a single line.
//!
//! ## Taxonomy
//!
//! - **Configuration**: the root directory is missing or is not a directory.
//!   Reported before any side effect.
//! - **Read failures**: the ignore file cannot be read, or `svn propget`
//!   fails.
//! - **Write failures**: `svn propset` fails. Directories already written are
//!   not rolled back.
//! - **Tracking failures**: `svn add` fails for a reason other than the two
//!   tolerated conflicts, or an exception glob is malformed.
//! - **Traversal failures**: the directory walk cannot read an entry.
//!
//! Tolerated tracking conflicts are not errors; they are reported through
//! [`crate::store::AddOutcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for svn-ignore operations
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory given to the synchronizer does not exist.
    #[error("Directory {} does not exist", path.display())]
    RootNotFound { path: PathBuf },

    /// The root directory given to the synchronizer is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The ignore file exists but could not be read.
    #[error("Could not read ignores from {}: {source}", path.display())]
    IgnoreFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `svn` binary could not be executed at all.
    #[error("Failed to run `{program} {command}` in {}: {message}", path.display())]
    SvnSpawn {
        program: String,
        command: String,
        path: PathBuf,
        message: String,
    },

    /// An `svn` command ran but reported a failure.
    #[error("svn {command} failed for {}: {stderr}", path.display())]
    SvnCommand {
        command: String,
        path: PathBuf,
        stderr: String,
    },

    /// An exception pattern is not a valid glob.
    #[error("Invalid exception pattern '{pattern}' in {}: {source}", directory.display())]
    GlobPattern {
        pattern: String,
        directory: PathBuf,
        #[source]
        source: glob::PatternError,
    },

    /// A path matched by an exception pattern could not be read.
    #[error("Could not expand exception pattern in {}: {message}", path.display())]
    GlobMatch { path: PathBuf, message: String },

    /// The directory walk failed to read an entry.
    #[error("Could not walk directory {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// An exception cannot be rooted at a directory whose path is not UTF-8.
    #[error("Cannot expand exception pattern '{pattern}' in {}: path is not valid UTF-8", directory.display())]
    NonUtf8Directory { pattern: String, directory: PathBuf },
}

impl Error {
    /// The operation name used when the error is surfaced to the user.
    pub fn operation(&self) -> &str {
        match self {
            Error::RootNotFound { .. } | Error::NotADirectory { .. } => "configuration",
            Error::IgnoreFileRead { .. } => "read ignore file",
            Error::SvnSpawn { command, .. } | Error::SvnCommand { command, .. } => command,
            Error::GlobPattern { .. }
            | Error::GlobMatch { .. }
            | Error::NonUtf8Directory { .. } => "expand exception",
            Error::Walk { .. } => "walk",
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
