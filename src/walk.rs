//! Top-down directory traversal
//!
//! [`walk`] yields one [`DirectoryNode`] per directory, parents strictly
//! before their children, in file-name order. Directories rejected by the
//! filter predicate are never descended into and do not show up in their
//! parent's child list.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::defaults::SVN_METADATA_DIR;
use crate::error::{Error, Result};

/// One directory visited by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Path of the directory, as reached from the walk root.
    pub path: PathBuf,
    /// The directory immediately above this one in the walk. `None` for the root.
    pub parent: Option<PathBuf>,
    /// Distance from the root.
    pub depth: usize,
    /// Names of child directories that will be visited.
    pub directories: BTreeSet<String>,
    /// Names of files directly inside the directory.
    pub files: BTreeSet<String>,
}

impl DirectoryNode {
    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Walk `root` top-down, descending only into directories accepted by `keep_dir`.
///
/// `keep_dir` receives the directory's file name. The root itself is always
/// visited.
pub fn walk<P, F>(root: P, keep_dir: F) -> impl Iterator<Item = Result<DirectoryNode>>
where
    P: AsRef<Path>,
    F: Fn(&str) -> bool + Clone,
{
    let keep_entry = keep_dir.clone();

    WalkDir::new(root.as_ref())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            // Always allow the root directory (depth 0) to be processed
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry.file_name().to_str().map(&keep_entry).unwrap_or(true)
        })
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry)),
            Ok(_) => None,
            Err(e) => Some(Err(Error::Walk {
                path: e.path().map(Path::to_path_buf).unwrap_or_default(),
                message: e.to_string(),
            })),
        })
        .map(move |entry| {
            let entry = entry?;
            let parent = if entry.depth() == 0 {
                None
            } else {
                entry.path().parent().map(Path::to_path_buf)
            };
            let (directories, files) = list_children(entry.path(), &keep_dir)?;

            Ok(DirectoryNode {
                path: entry.path().to_path_buf(),
                parent,
                depth: entry.depth(),
                directories,
                files,
            })
        })
}

/// Walk a Subversion working copy, pruning `.svn` metadata directories.
pub fn walk_working_copy<P: AsRef<Path>>(root: P) -> impl Iterator<Item = Result<DirectoryNode>> {
    walk(root, |name| name != SVN_METADATA_DIR)
}

fn list_children<F>(directory: &Path, keep_dir: &F) -> Result<(BTreeSet<String>, BTreeSet<String>)>
where
    F: Fn(&str) -> bool,
{
    let walk_error = |e: std::io::Error| Error::Walk {
        path: directory.to_path_buf(),
        message: e.to_string(),
    };

    let mut directories = BTreeSet::new();
    let mut files = BTreeSet::new();

    for entry in fs::read_dir(directory).map_err(walk_error)? {
        let entry = entry.map_err(walk_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().map_err(walk_error)?;

        if file_type.is_dir() {
            if keep_dir(&name) {
                directories.insert(name);
            }
        } else if entry.path().is_file() {
            files.insert(name);
        }
    }

    Ok((directories, files))
}
