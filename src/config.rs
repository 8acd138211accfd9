//! # Synchronization Options
//!
//! [`SyncOptions`] carries the knobs of a synchronization run. The
//! command-line driver builds one from its flags; library users can start from
//! [`SyncOptions::default`] and adjust it with the builder methods.
//!
//! | Option        | Default      | Effect                                              |
//! |---------------|--------------|-----------------------------------------------------|
//! | `recursive`   | `true`       | Fold the parent's ignore property into each child.  |
//! | `overwrite`   | `false`      | Ignore the property already set on each directory.  |
//! | `ignore_file` | `.svnignore` | Name of the per-directory ignore file.              |

use crate::defaults::DEFAULT_IGNORE_FILE;

/// Options for one synchronization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Apply a directory's ignores to its children as well.
    pub recursive: bool,
    /// Replace existing ignore properties instead of merging with them.
    pub overwrite: bool,
    /// The ignore file to look for in every directory.
    pub ignore_file: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            overwrite: false,
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
        }
    }
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }
}
