//! Exception glob expansion
//!
//! An exception line `!<glob>` names paths relative to the directory whose
//! ignore set contains it. [`expand_exception`] resolves the glob against the
//! filesystem lazily; matches inside `.svn` metadata are skipped.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use glob::Pattern;

use crate::defaults::SVN_METADATA_DIR;
use crate::error::{Error, Result};

/// Build the absolute glob for `glob` rooted at `directory`.
///
/// The directory part is escaped so that brackets or asterisks in real
/// directory names are matched literally. `glob` only matches UTF-8 patterns,
/// so a directory path that is not valid UTF-8 is rejected.
pub fn rooted_pattern(directory: &Path, glob: &str) -> Result<String> {
    let base = directory.to_str().ok_or_else(|| Error::NonUtf8Directory {
        pattern: glob.to_string(),
        directory: directory.to_path_buf(),
    })?;
    let base = Pattern::escape(base);
    let relative = glob.trim_start_matches(['/', '\\']);

    if base.ends_with(['/', '\\']) {
        Ok(format!("{}{}", base, relative))
    } else {
        Ok(format!("{}{}{}", base, MAIN_SEPARATOR, relative))
    }
}

/// Expand an exception glob rooted at `directory`.
pub fn expand_exception(
    directory: &Path,
    glob: &str,
) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let pattern = rooted_pattern(directory, glob)?;

    let paths = glob::glob(&pattern).map_err(|source| Error::GlobPattern {
        pattern: glob.to_string(),
        directory: directory.to_path_buf(),
        source,
    })?;

    let base_depth = directory.components().count();

    Ok(paths
        .map(|entry| {
            entry.map_err(|e| Error::GlobMatch {
                path: e.path().to_path_buf(),
                message: e.error().to_string(),
            })
        })
        .filter(move |entry| match entry {
            Ok(path) => !inside_metadata(path, base_depth),
            Err(_) => true,
        }))
}

/// Whether `path` has a `.svn` component below the first `skip` components.
fn inside_metadata(path: &Path, skip: usize) -> bool {
    path.components()
        .skip(skip)
        .any(|c| matches!(c, Component::Normal(name) if name == SVN_METADATA_DIR))
}
