//! # svn-ignore
//!
//! This library merges per-directory ignore files (`.svnignore` by default)
//! into Subversion's `svn:ignore` property, recursively across a working copy.
//! It is used by the `svn-ignore` command-line tool but the engine is
//! independent of the `svn` binary and can be driven with any property store.
//!
//! ## Quick Example
//!
//! ```
//! use svn_ignore::config::SyncOptions;
//! use svn_ignore::report::MemoryReporter;
//! use svn_ignore::store::MemoryStore;
//! use svn_ignore::synchronizer::IgnoreSynchronizer;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join(".svnignore"), "target\n#build output\n").unwrap();
//!
//! let store = MemoryStore::new();
//! let reporter = MemoryReporter::new();
//! let sync = IgnoreSynchronizer::new(&store, &store, &reporter, SyncOptions::default());
//!
//! let report = sync.apply(dir.path()).unwrap();
//! assert_eq!(report.directories, 1);
//! assert_eq!(store.property(dir.path()), Some(vec!["target".to_string()]));
//! ```
//!
//! ## Core Concepts
//!
//! - **Patterns (`pattern`)**: every line is classified once into a comment,
//!   an exception (`!glob`) or a rule; an `IgnoreSet` holds the patterns of
//!   one directory with set semantics.
//! - **Collaborators (`store`, `svn`)**: the `PropertyStore` and `Tracker`
//!   traits, implemented by `SvnClient` on top of the `svn` binary and by the
//!   in-memory `MemoryStore`.
//! - **Traversal (`walk`)**: a top-down directory walk with a filter
//!   predicate, used to prune `.svn` metadata.
//! - **Exceptions (`exceptions`)**: glob expansion of `!` patterns, rooted at
//!   the directory that declares them.
//! - **Synchronizer (`synchronizer`)**: the per-directory
//!   read-merge-promote-write sequence.
//! - **Diagnostics (`report`)**: the `Reporter` sink handed to the
//!   synchronizer instead of a global logger.

pub mod config;
pub mod defaults;
pub mod error;
pub mod exceptions;
pub mod output;
pub mod pattern;
pub mod report;
pub mod store;
pub mod suggestions;
pub mod svn;
pub mod synchronizer;
pub mod walk;

#[cfg(test)]
mod sync_proptest;
