//! # Output Configuration
//!
//! This module controls the appearance of the status lines printed by the
//! `svn-ignore` binary after a run, based on terminal capabilities and user
//! preferences.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svn_ignore::output::{OutputConfig, emoji};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! println!("{} Synchronized", emoji(&config, "✅", "[OK]"));
//! ```

use std::env;

use crate::synchronizer::SyncReport;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Auto mode: environment overrides first, then the terminal itself.
    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        // No override set: ask the terminal behind stdout
        console::Term::stdout().features().colors_supported()
    }

    /// Colors on, regardless of the environment.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Colors off, regardless of the environment.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Pick the status marker for the current terminal.
///
/// `emoji_str` is used when colors are enabled, `plain` otherwise, so logs
/// captured from a pipe or a dumb terminal stay ASCII.
///
/// # Example
/// ```rust,ignore
/// let config = OutputConfig::from_env_and_flag("never");
/// assert_eq!(emoji(&config, "✅", "[OK]"), "[OK]");
/// ```
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// One-line summary of a successful run.
///
/// Counts written directories and ignore files; the exception count is only
/// mentioned when something was added.
pub fn summary(config: &OutputConfig, report: &SyncReport) -> String {
    let mut line = format!(
        "{} Synchronized {} {} ({} with an ignore file)",
        emoji(config, "✅", "[OK]"),
        report.directories,
        if report.directories == 1 {
            "directory"
        } else {
            "directories"
        },
        report.ignore_files,
    );

    if report.exceptions_added > 0 {
        line.push_str(&format!(", added {} exception(s)", report.exceptions_added));
    }

    line
}
