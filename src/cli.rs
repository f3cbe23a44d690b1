//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - `-d` is the delimiter, not debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{DEFAULT_DELIMITER, LogLevel, RunConfig};

/// Strip the compiled segment from DataStage `.dsx` export files.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "strip-dsx",
    author,
    version,
    about = "Strip the compiled section of DataStage `.dsx` files"
)]
pub struct Args {
    /// Treat FILENAME as a directory and strip its contents recursively.
    #[arg(short, long)]
    pub recursive: bool,

    /// Everything from the first instance of this marker onward is removed.
    #[arg(
        short,
        long,
        value_name = "STRING",
        default_value = DEFAULT_DELIMITER,
        value_parser = parse_delimiter
    )]
    pub delimiter: String,

    /// Apply every change without asking for confirmation.
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be stripped, but do not modify files.
    #[arg(long)]
    pub dry_run: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(long)]
    pub debug: bool,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// File to strip, or directory root with `-r`.
    #[arg(value_name = "FILENAME", value_hint = ValueHint::AnyPath)]
    pub filename: PathBuf,
}

fn parse_delimiter(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("delimiter must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level.unwrap_or_default()
    }

    /// Build the run configuration.
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            log_level: self.effective_log_level(),
            target_path: self.filename,
            delimiter: self.delimiter,
            recursive: self.recursive,
            force: self.force,
            dry_run: self.dry_run,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
