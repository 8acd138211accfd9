//! # Ignore Synchronizer
//!
//! The merge-and-apply engine. [`IgnoreSynchronizer::apply`] walks a working
//! copy top-down, skipping `.svn` metadata, and for every directory `D`:
//!
//! 1.  **Existing ignores**: reads the `svn:ignore` property already set on
//!     `D`, unless overwriting. Stored lines are taken verbatim.
//! 2.  **File ignores**: reads the ignore file in `D`, if there is one,
//!     without comments or blank lines.
//! 3.  **Inherited ignores**: in recursive mode, reads the property of `D`'s
//!     parent. The parent was written before `D` is visited, so this is the
//!     parent's final merged value. Re-querying per directory keeps whatever
//!     was set on deeper directories, which `svn propset --recursive` would
//!     destroy.
//! 4.  **Merge**: unions the three sets.
//! 5.  **Exceptions**: expands every `!glob` rooted at `D` and adds each match
//!     to version control. Already-versioned paths and paths whose parent is
//!     unversioned are skipped.
//! 6.  **Persist**: writes the remaining rules back to `D`, even when empty.
//!
//! Any failure stops the walk immediately. Directories written before the
//! failure keep their new value.

use std::path::Path;

use crate::config::SyncOptions;
use crate::error::{Error, Result};
use crate::exceptions::expand_exception;
use crate::pattern::{read_ignore_file, IgnoreSet, PatternLine};
use crate::report::Reporter;
use crate::store::{AddOutcome, PropertyStore, Tracker};
use crate::walk::{walk_working_copy, DirectoryNode};

/// Counters describing a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Directories whose ignore property was written.
    pub directories: usize,
    /// Directories that contained an ignore file.
    pub ignore_files: usize,
    /// Paths newly added to version control by exceptions.
    pub exceptions_added: usize,
    /// Exception matches skipped because they were already versioned or
    /// their parent was not.
    pub conflicts_tolerated: usize,
}

/// Merges ignore files into the ignore property of a directory tree
pub struct IgnoreSynchronizer<S, T, R> {
    store: S,
    tracker: T,
    reporter: R,
    options: SyncOptions,
}

impl<S, T, R> IgnoreSynchronizer<S, T, R>
where
    S: PropertyStore,
    T: Tracker,
    R: Reporter,
{
    pub fn new(store: S, tracker: T, reporter: R, options: SyncOptions) -> Self {
        Self {
            store,
            tracker,
            reporter,
            options,
        }
    }

    /// Synchronize every directory under `root`, `root` included.
    pub fn apply(&self, root: &Path) -> Result<SyncReport> {
        if !root.exists() {
            return Err(Error::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut report = SyncReport::default();

        for node in walk_working_copy(root) {
            let result = node.and_then(|node| self.sync_directory(&node, &mut report));

            if let Err(e) = result {
                self.reporter.error(&format!("[{}] {}", e.operation(), e));
                return Err(e);
            }
        }

        Ok(report)
    }

    /// Run the read-merge-promote-write sequence for one directory.
    pub fn sync_directory(&self, node: &DirectoryNode, report: &mut SyncReport) -> Result<()> {
        let directory = node.path.as_path();

        let mut ignores = self.existing_ignores(directory)?;
        ignores.merge(self.file_ignores(node, report)?);
        ignores.merge(self.inherited_ignores(node)?);

        for glob in ignores.take_exceptions() {
            self.promote_exception(directory, &glob, report)?;
        }

        let lines = ignores.to_property_lines();
        self.reporter.info(&format!(
            "Applying ignores to directory {}",
            directory.display()
        ));
        self.reporter.debug(&format!("Final ignores: {:?}", lines));

        self.store.set_ignores(directory, &lines)?;
        report.directories += 1;

        Ok(())
    }

    fn existing_ignores(&self, directory: &Path) -> Result<IgnoreSet> {
        if self.options.overwrite {
            return Ok(IgnoreSet::new());
        }

        let lines = self.store.get_ignores(directory)?;
        self.reporter.debug(&format!(
            "Found existing ignores in {}: {:?}",
            directory.display(),
            lines
        ));

        Ok(IgnoreSet::from_property_lines(lines))
    }

    fn file_ignores(&self, node: &DirectoryNode, report: &mut SyncReport) -> Result<IgnoreSet> {
        if !node.has_file(&self.options.ignore_file) {
            return Ok(IgnoreSet::new());
        }

        let path = node.path.join(&self.options.ignore_file);
        let lines = read_ignore_file(&path, true)?;
        report.ignore_files += 1;

        self.reporter.info(&format!(
            "Found ignores in {}: {:?}",
            path.display(),
            lines.iter().map(PatternLine::to_line).collect::<Vec<_>>()
        ));

        Ok(lines.into_iter().collect())
    }

    fn inherited_ignores(&self, node: &DirectoryNode) -> Result<IgnoreSet> {
        let parent = match (&node.parent, self.options.recursive) {
            (Some(parent), true) => parent,
            _ => return Ok(IgnoreSet::new()),
        };

        let lines = self.store.get_ignores(parent)?;
        self.reporter.debug(&format!(
            "Inherited ignores from {}: {:?}",
            parent.display(),
            lines
        ));

        Ok(IgnoreSet::from_property_lines(lines))
    }

    fn promote_exception(
        &self,
        directory: &Path,
        glob: &str,
        report: &mut SyncReport,
    ) -> Result<()> {
        for path in expand_exception(directory, glob)? {
            let path = path?;

            match self.tracker.add(&path)? {
                AddOutcome::Added => {
                    self.reporter.info(&format!("Added exception {}", path.display()));
                    report.exceptions_added += 1;
                }
                AddOutcome::AlreadyTracked => {
                    self.reporter.debug(&format!(
                        "Exception {} is already under version control",
                        path.display()
                    ));
                    report.conflicts_tolerated += 1;
                }
                AddOutcome::ParentNotTracked => {
                    self.reporter.debug(&format!(
                        "Skipping exception {}: parent directory is not under version control",
                        path.display()
                    ));
                    report.conflicts_tolerated += 1;
                }
            }
        }

        Ok(())
    }
}
