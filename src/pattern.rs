//! # Ignore Patterns and Sets
//!
//! Every line that enters the synchronizer, whether it comes from an ignore
//! file or from the `svn:ignore` property, goes through [`classify`] exactly
//! once. Downstream code works with [`PatternLine`] values and never looks at
//! the leading `#` or `!` again.
//!
//! An [`IgnoreSet`] is the collection of patterns attached to one directory.
//! It has set semantics: pattern equality is exact string comparison, so
//! `*.txt` and `/*.txt` are distinct, and duplicates collapse on insert.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A single classified line of an ignore file or ignore property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternLine {
    /// A line starting with `#`, kept verbatim including the marker.
    Comment(String),
    /// A line starting with `!`, stored without the marker.
    Exception(String),
    /// Any other non-blank line.
    Rule(String),
}

impl PatternLine {
    /// The line as it would appear in an ignore file.
    pub fn to_line(&self) -> String {
        match self {
            PatternLine::Comment(text) => text.clone(),
            PatternLine::Exception(glob) => format!("!{}", glob),
            PatternLine::Rule(pattern) => pattern.clone(),
        }
    }
}

/// Classify a raw line. Blank lines yield `None`.
pub fn classify(line: &str) -> Option<PatternLine> {
    if line.trim().is_empty() {
        return None;
    }

    let line = match line.strip_prefix('!') {
        Some(glob) => PatternLine::Exception(glob.to_string()),
        None if line.starts_with('#') => PatternLine::Comment(line.to_string()),
        None => PatternLine::Rule(line.to_string()),
    };

    Some(line)
}

/// Classify every line of `content`, dropping blank lines.
pub fn parse_lines(content: &str) -> Vec<PatternLine> {
    content.lines().filter_map(classify).collect()
}

/// Read and classify an ignore file.
///
/// With `strip_comments` set, comment lines are dropped along with blank
/// lines; otherwise they are returned as [`PatternLine::Comment`].
pub fn read_ignore_file(path: &Path, strip_comments: bool) -> Result<Vec<PatternLine>> {
    let content = fs::read_to_string(path).map_err(|source| Error::IgnoreFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_lines(&content)
        .into_iter()
        .filter(|line| !(strip_comments && matches!(line, PatternLine::Comment(_))))
        .collect())
}

/// The ignore patterns associated with one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    patterns: BTreeSet<PatternLine>,
}

impl IgnoreSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw lines, classifying each one.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| classify(line.as_ref()))
            .collect()
    }

    /// Build a set from lines of a stored ignore property.
    ///
    /// Stored values are already clean: every non-empty line is a rule,
    /// including lines starting with `#` or `!`.
    pub fn from_property_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter(|line| !line.as_ref().is_empty())
            .map(|line| PatternLine::Rule(line.as_ref().to_string()))
            .collect()
    }

    pub fn insert(&mut self, pattern: PatternLine) -> bool {
        self.patterns.insert(pattern)
    }

    /// Union `other` into this set.
    pub fn merge(&mut self, other: IgnoreSet) {
        self.patterns.extend(other.patterns);
    }

    pub fn contains(&self, pattern: &PatternLine) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternLine> {
        self.patterns.iter()
    }

    /// Remove every exception from the set and return their globs.
    pub fn take_exceptions(&mut self) -> Vec<String> {
        let (exceptions, rest): (BTreeSet<_>, BTreeSet<_>) = std::mem::take(&mut self.patterns)
            .into_iter()
            .partition(|line| matches!(line, PatternLine::Exception(_)));
        self.patterns = rest;

        exceptions
            .into_iter()
            .filter_map(|line| match line {
                PatternLine::Exception(glob) => Some(glob),
                _ => None,
            })
            .collect()
    }

    /// The lines to persist in the ignore property.
    ///
    /// Comments and exceptions are never written.
    pub fn to_property_lines(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter_map(|line| match line {
                PatternLine::Rule(pattern) => Some(pattern.clone()),
                _ => None,
            })
            .collect()
    }

    /// Newline-joined property value.
    pub fn to_property_value(&self) -> String {
        self.to_property_lines().join("\n")
    }
}

impl FromIterator<PatternLine> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = PatternLine>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl Extend<PatternLine> for IgnoreSet {
    fn extend<T: IntoIterator<Item = PatternLine>>(&mut self, iter: T) {
        self.patterns.extend(iter);
    }
}
