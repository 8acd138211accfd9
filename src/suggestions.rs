//! # Error Suggestions
//!
//! This module turns library errors into user-facing errors carrying `hint:`
//! lines. Errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svn_ignore::suggestions;
//!
//! let report = synchronizer.apply(&root).map_err(suggestions::for_error)?;
//! ```

use crate::error::Error;
use crate::svn::error_codes;

/// `E155007`: the path is not a working copy.
const NOT_A_WORKING_COPY: &str = "155007";
/// `E155004`: the working copy is locked.
const WORKING_COPY_LOCKED: &str = "155004";

/// Attach hints to a synchronization error.
pub fn for_error(error: Error) -> anyhow::Error {
    let hints: Vec<&str> = match &error {
        Error::RootNotFound { .. } | Error::NotADirectory { .. } => vec![
            "Pass the root of a Subversion working copy as the first argument",
            "Omit the argument to use the current directory",
        ],
        Error::SvnSpawn { .. } => vec![
            "Install the Subversion command-line client",
            "Use --svn or SVN_IGNORE_SVN to point at the svn executable",
        ],
        Error::SvnCommand { stderr, .. } => svn_hints(stderr),
        Error::GlobPattern { .. } => vec![
            "Use * for single path component, ** for recursive matching",
            "Use [abc] for character classes, [!abc] to negate",
            "Escape special characters with brackets, e.g. [*]",
        ],
        Error::IgnoreFileRead { .. } => {
            vec!["Check that the ignore file is readable and valid UTF-8"]
        }
        Error::NonUtf8Directory { .. } => {
            vec!["Rename the directory to a UTF-8 name or move the exception to a parent"]
        }
        Error::GlobMatch { .. } | Error::Walk { .. } => {
            vec!["Check the permissions of the directories in the working copy"]
        }
    };

    if hints.is_empty() {
        return anyhow::Error::new(error);
    }

    let hints = hints
        .iter()
        .map(|hint| format!("hint: {}", hint))
        .collect::<Vec<_>>()
        .join("\n");

    anyhow::anyhow!("{error}\n\n{hints}")
}

fn svn_hints(stderr: &str) -> Vec<&'static str> {
    let codes = error_codes(stderr);

    if codes.iter().any(|code| code == NOT_A_WORKING_COPY) {
        vec![
            "Run svn-ignore inside a checked-out working copy",
            "Add unversioned directories with 'svn add --depth=empty' first",
        ]
    } else if codes.iter().any(|code| code == WORKING_COPY_LOCKED) {
        vec!["Run 'svn cleanup' to remove stale working copy locks"]
    } else {
        Vec::new()
    }
}
