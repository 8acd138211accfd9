//! Subversion command-line client
//!
//! [`SvnClient`] implements [`PropertyStore`] and [`Tracker`] by running the
//! system `svn` binary, which picks up the working copy's configuration,
//! credentials and format without any extra setup.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use crate::defaults::{DEFAULT_SVN_BINARY, IGNORE_PROPERTY};
use crate::error::{Error, Result};
use crate::store::{AddOutcome, PropertyStore, Tracker};

/// `W200017`: property not found on the target.
const PROPERTY_NOT_FOUND: &str = "200017";
/// `W150002`: target is already under version control.
const ALREADY_VERSIONED: &str = "150002";
/// `W155010` / `W155007`: a containing directory is not versioned.
const NOT_VERSIONED: [&str; 2] = ["155010", "155007"];

/// Runs `svn` subcommands against a working copy
#[derive(Debug, Clone)]
pub struct SvnClient {
    program: String,
}

impl Default for SvnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SvnClient {
    /// Create a client that runs `svn` from `PATH`
    pub fn new() -> Self {
        Self::with_program(DEFAULT_SVN_BINARY)
    }

    /// Create a client that runs the given executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run<I, S>(&self, command: &str, args: I, path: &Path) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        trace!("running {} {} for {}", self.program, command, path.display());

        Command::new(&self.program)
            .arg(command)
            .arg("--non-interactive")
            .args(args)
            .output()
            .map_err(|e| Error::SvnSpawn {
                program: self.program.clone(),
                command: command.to_string(),
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

impl PropertyStore for SvnClient {
    fn get_ignores(&self, directory: &Path) -> Result<Vec<String>> {
        let output = self.run(
            "propget",
            [OsStr::new(IGNORE_PROPERTY), directory.as_os_str()],
            directory,
        )?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if has_code(&stderr, &[PROPERTY_NOT_FOUND]) {
            return Ok(Vec::new());
        }

        if !output.status.success() {
            return Err(Error::SvnCommand {
                command: "propget".to_string(),
                path: directory.to_path_buf(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(property_lines(&String::from_utf8_lossy(&output.stdout)))
    }

    fn set_ignores(&self, directory: &Path, patterns: &[String]) -> Result<()> {
        let value = patterns.join("\n");
        let output = self.run(
            "propset",
            [
                OsStr::new("--"),
                OsStr::new(IGNORE_PROPERTY),
                OsStr::new(&value),
                directory.as_os_str(),
            ],
            directory,
        )?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        // svn reports some failures on stderr with a zero exit status
        if !output.status.success() || !stderr.trim().is_empty() {
            return Err(Error::SvnCommand {
                command: "propset".to_string(),
                path: directory.to_path_buf(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Tracker for SvnClient {
    fn add(&self, path: &Path) -> Result<AddOutcome> {
        let output = self.run("add", [path.as_os_str()], path)?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        match classify_add(output.status.success(), &stderr) {
            Some(outcome) => Ok(outcome),
            None => Err(Error::SvnCommand {
                command: "add".to_string(),
                path: path.to_path_buf(),
                stderr: stderr.trim().to_string(),
            }),
        }
    }
}

/// Map the result of `svn add` onto an outcome, `None` meaning failure.
fn classify_add(success: bool, stderr: &str) -> Option<AddOutcome> {
    if has_code(stderr, &[ALREADY_VERSIONED]) {
        Some(AddOutcome::AlreadyTracked)
    } else if has_code(stderr, &NOT_VERSIONED) {
        Some(AddOutcome::ParentNotTracked)
    } else if success {
        Some(AddOutcome::Added)
    } else {
        None
    }
}

/// Split `propget` output into pattern lines, dropping empty ones.
fn property_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the numeric part of every `svn: E123456` / `svn: warning: W123456` code.
pub fn error_codes(stderr: &str) -> Vec<String> {
    static CODE: OnceLock<Regex> = OnceLock::new();
    let code = CODE.get_or_init(|| {
        Regex::new(r"\b[EW](\d{6})\b").expect("svn error code pattern is valid")
    });

    code.captures_iter(stderr)
        .map(|captures| captures[1].to_string())
        .collect()
}

fn has_code(stderr: &str, wanted: &[&str]) -> bool {
    error_codes(stderr)
        .iter()
        .any(|code| wanted.contains(&code.as_str()))
}
