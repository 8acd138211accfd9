//! CLI argument parsing and logging setup

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::commands;
use svn_ignore::output::OutputConfig;

/// An utility that provides .svnignore functionality similar to Git
#[derive(Parser, Debug)]
#[command(name = "svn-ignore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    apply: commands::apply::ApplyArgs,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["auto", "always", "never"]
    )]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace); --verbose means debug
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.level_filter());
        let output = OutputConfig::from_env_and_flag(&self.color);

        commands::apply::execute(self.apply, &output)
    }

    /// The effective log level, `--verbose` taking precedence.
    fn level_filter(&self) -> LevelFilter {
        if self.apply.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
        }
    }
}

/// Log to stdout as `LEVEL: message`.
fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .try_init();
}
