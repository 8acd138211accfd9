//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a Subversion working copy fixture and helpers to
//! query it, so tests can run the real `svn` binary against a throwaway
//! repository.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! #[cfg_attr(not(feature = "integration-tests"), ignore)]
//! fn test_example() {
//!     let fixture = SvnFixture::new();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{propget, set_of, svn, svn_status, SvnFixture};
}

/// Run `svn` with `args` in `cwd` and return its stdout, panicking on failure.
pub fn svn(cwd: &Path, args: &[&str]) -> String {
    let output = Command::new("svn")
        .args(args)
        .arg("--non-interactive")
        .current_dir(cwd)
        .output()
        .expect("Failed to execute svn");

    assert!(
        output.status.success(),
        "svn {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// The `svn:ignore` property of `path` as a set of lines.
#[allow(dead_code)]
pub fn propget(path: &Path) -> BTreeSet<String> {
    let output = Command::new("svn")
        .args(["propget", "svn:ignore"])
        .arg(path)
        .output()
        .expect("Failed to execute svn");

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `svn status` of `path`, one entry per line.
#[allow(dead_code)]
pub fn svn_status(path: &Path) -> Vec<String> {
    svn(path, &["status"])
        .lines()
        .map(str::to_string)
        .collect()
}

/// Build a set of owned strings.
#[allow(dead_code)]
pub fn set_of(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// A committed Subversion working copy laid out as:
///
/// ```text
/// checkout/.svnignore                       VALUE1, #comment
/// checkout/directory/.svnignore             VALUE2
/// checkout/directory_props/                 svn:ignore = EXISTING_VALUE
/// checkout/directory_exception/.svnignore   *.txt, !exception.txt
/// ```
pub struct SvnFixture {
    temp_dir: assert_fs::TempDir,
}

impl SvnFixture {
    /// Create the repository, check it out and commit the layout.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let repository = temp_dir.path().join("repository");

        let status = Command::new("svnadmin")
            .arg("create")
            .arg(&repository)
            .status()
            .expect("Failed to execute svnadmin");
        assert!(status.success(), "svnadmin create failed");

        let url = format!("file://{}", repository.display());
        svn(temp_dir.path(), &["checkout", &url, "checkout"]);

        let fixture = Self { temp_dir };
        fixture.write(".svnignore", "VALUE1\n#comment\n");
        fixture.write("directory/.svnignore", "VALUE2\n");
        fixture.mkdir("directory_props");
        fixture.write("directory_exception/.svnignore", "*.txt\n!exception.txt\n");

        let checkout = fixture.checkout();
        svn(
            &checkout,
            &[
                "add",
                ".svnignore",
                "directory",
                "directory_props",
                "directory_exception",
            ],
        );
        svn(
            &checkout,
            &["propset", "svn:ignore", "EXISTING_VALUE", "directory_props"],
        );
        svn(&checkout, &["commit", "-m", "Fixture"]);

        fixture
    }

    /// The working copy root.
    pub fn checkout(&self) -> PathBuf {
        self.temp_dir.path().join("checkout")
    }

    /// Path of `relative` inside the working copy.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.checkout().join(relative)
    }

    /// Write a file inside the working copy, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        self.temp_dir
            .child("checkout")
            .child(relative)
            .write_str(content)
            .expect("Failed to write file");
    }

    /// Create a directory inside the working copy.
    pub fn mkdir(&self, relative: &str) {
        self.temp_dir
            .child("checkout")
            .child(relative)
            .create_dir_all()
            .expect("Failed to create directory");
    }
}

impl Default for SvnFixture {
    fn default() -> Self {
        Self::new()
    }
}
