//! Collaborator interfaces for the ignore property and path tracking
//!
//! The synchronizer never talks to Subversion directly. It reads and writes
//! ignore properties through a [`PropertyStore`] and promotes exceptions
//! through a [`Tracker`]. [`crate::svn::SvnClient`] implements both on top of
//! the `svn` binary; [`MemoryStore`] implements both in memory.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Per-directory ignore property storage
pub trait PropertyStore {
    /// Read the ignore property of `directory`, one pattern per line.
    fn get_ignores(&self, directory: &Path) -> Result<Vec<String>>;

    /// Replace the ignore property of `directory`. Never recursive.
    fn set_ignores(&self, directory: &Path, patterns: &[String]) -> Result<()>;
}

/// Result of asking the tracker to add a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The path is now scheduled for addition.
    Added,
    /// The path was already under version control.
    AlreadyTracked,
    /// A containing directory is not under version control.
    ParentNotTracked,
}

/// Registers paths for version control
pub trait Tracker {
    fn add(&self, path: &Path) -> Result<AddOutcome>;
}

impl<T: PropertyStore + ?Sized> PropertyStore for &T {
    fn get_ignores(&self, directory: &Path) -> Result<Vec<String>> {
        (**self).get_ignores(directory)
    }

    fn set_ignores(&self, directory: &Path, patterns: &[String]) -> Result<()> {
        (**self).set_ignores(directory, patterns)
    }
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn add(&self, path: &Path) -> Result<AddOutcome> {
        (**self).add(path)
    }
}

/// In-memory property store and tracker
///
/// Paths are used as given; callers are expected to pass the same spelling
/// for the same directory, which the synchronizer does. A path is considered
/// tracked when it was registered with [`MemoryStore::track`] or added
/// through [`Tracker::add`]; adding a path whose parent is not tracked
/// reports [`AddOutcome::ParentNotTracked`] unless the parent is a root
/// registered with [`MemoryStore::track`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    properties: RefCell<HashMap<PathBuf, Vec<String>>>,
    tracked: RefCell<BTreeSet<PathBuf>>,
    added: RefCell<Vec<PathBuf>>,
    writes: RefCell<Vec<PathBuf>>,
    failing_reads: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
    failing_adds: BTreeSet<PathBuf>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the ignore property of a directory.
    pub fn with_property<P: AsRef<Path>>(self, directory: P, patterns: &[&str]) -> Self {
        self.properties.borrow_mut().insert(
            directory.as_ref().to_path_buf(),
            patterns.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    /// Mark a path as already under version control.
    pub fn track<P: AsRef<Path>>(self, path: P) -> Self {
        self.tracked.borrow_mut().insert(path.as_ref().to_path_buf());
        self
    }

    /// Make every read of `directory`'s property fail.
    pub fn fail_reads_from<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.failing_reads.insert(directory.as_ref().to_path_buf());
        self
    }

    /// Make every write to `directory` fail.
    pub fn fail_writes_to<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.failing_writes.insert(directory.as_ref().to_path_buf());
        self
    }

    /// Make adding `path` fail with an error that is not a tolerated conflict.
    pub fn fail_adds_to<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.failing_adds.insert(path.as_ref().to_path_buf());
        self
    }

    /// The stored property of `directory`, if it was ever set.
    pub fn property<P: AsRef<Path>>(&self, directory: P) -> Option<Vec<String>> {
        self.properties.borrow().get(directory.as_ref()).cloned()
    }

    /// The stored property of `directory` as a sorted set.
    pub fn property_set<P: AsRef<Path>>(&self, directory: P) -> BTreeSet<String> {
        self.property(directory)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    /// Paths added through [`Tracker::add`], in call order.
    pub fn added(&self) -> Vec<PathBuf> {
        self.added.borrow().clone()
    }

    /// Directories written through [`PropertyStore::set_ignores`], in call order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }
}

impl PropertyStore for MemoryStore {
    fn get_ignores(&self, directory: &Path) -> Result<Vec<String>> {
        if self.failing_reads.contains(directory) {
            return Err(rejected("propget", directory, "read rejected"));
        }

        Ok(self
            .properties
            .borrow()
            .get(directory)
            .cloned()
            .unwrap_or_default())
    }

    fn set_ignores(&self, directory: &Path, patterns: &[String]) -> Result<()> {
        if self.failing_writes.contains(directory) {
            return Err(rejected("propset", directory, "write rejected"));
        }

        self.writes.borrow_mut().push(directory.to_path_buf());
        self.properties
            .borrow_mut()
            .insert(directory.to_path_buf(), patterns.to_vec());
        Ok(())
    }
}

impl Tracker for MemoryStore {
    fn add(&self, path: &Path) -> Result<AddOutcome> {
        if self.failing_adds.contains(path) {
            return Err(rejected("add", path, "add rejected"));
        }

        let mut tracked = self.tracked.borrow_mut();

        if tracked.contains(path) {
            return Ok(AddOutcome::AlreadyTracked);
        }

        let parent_tracked = path
            .parent()
            .map(|parent| tracked.contains(parent))
            .unwrap_or(false);
        if !parent_tracked {
            return Ok(AddOutcome::ParentNotTracked);
        }

        tracked.insert(path.to_path_buf());
        self.added.borrow_mut().push(path.to_path_buf());
        Ok(AddOutcome::Added)
    }
}

fn rejected(command: &str, path: &Path, reason: &str) -> Error {
    Error::SvnCommand {
        command: command.to_string(),
        path: path.to_path_buf(),
        stderr: reason.to_string(),
    }
}
