//! Diagnostic output sink
//!
//! The synchronizer writes its progress messages to a [`Reporter`] handed to
//! it at construction instead of a process-wide logger. The binary passes a
//! [`LogReporter`], which forwards to the `log` facade; tests pass a
//! [`MemoryReporter`] and inspect what was said.

use std::cell::RefCell;

use log::Level;

/// Receives diagnostic messages from the synchronizer
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.report(Level::Debug, message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, level: Level, message: &str) {
        (**self).report(level, message);
    }
}

/// Forwards messages to the `log` facade under the `svn_ignore` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: Level, message: &str) {
        log::log!(target: "svn_ignore", level, "{}", message);
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far, in order.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.messages
            .borrow_mut()
            .push((level, message.to_string()));
    }
}
