//! Default values for svn-ignore configuration.
//!
//! This module provides centralized default values used by the library and
//! the command-line driver, ensuring consistency and avoiding duplication.

/// Name of the ignore file looked up in every directory.
///
/// This can be overridden by the `--ignore-file` CLI flag or the
/// `SVN_IGNORE_FILE` environment variable.
pub const DEFAULT_IGNORE_FILE: &str = ".svnignore";

/// The Subversion metadata directory, never descended into.
pub const SVN_METADATA_DIR: &str = ".svn";

/// The versioned property holding a directory's ignore patterns.
pub const IGNORE_PROPERTY: &str = "svn:ignore";

/// The `svn` executable used when none is configured.
///
/// This can be overridden by the `--svn` CLI flag or the `SVN_IGNORE_SVN`
/// environment variable.
pub const DEFAULT_SVN_BINARY: &str = "svn";
