//! Core configuration types.
//! - RunConfig holds the settings of one invocation.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::DEFAULT_DELIMITER;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for one invocation.
///
/// Never mutated after parsing. The walker derives a fresh value per visited
/// entry with [`RunConfig::for_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// File or directory being processed
    pub target_path: PathBuf,
    /// Everything from the first occurrence of this marker onward is removed
    pub delimiter: String,
    /// Treat `target_path` as a directory root to walk
    pub recursive: bool,
    /// Treat every confirmation as affirmed without reading input
    pub force: bool,
    /// Report what would change but never write
    pub dry_run: bool,
    /// Console verbosity
    pub log_level: LogLevel,
}

impl RunConfig {
    /// Construct a config for `target_path`; other fields use defaults.
    pub fn new(target_path: impl Into<PathBuf>) -> Self {
        Self {
            target_path: target_path.into(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            recursive: false,
            force: false,
            dry_run: false,
            log_level: LogLevel::Normal,
        }
    }

    /// Same settings, different target.
    pub fn for_path(&self, path: &Path) -> Self {
        Self {
            target_path: path.to_path_buf(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_path_only_rebinds_target() {
        let mut cfg = RunConfig::new("/exports");
        cfg.recursive = true;
        cfg.force = true;
        cfg.delimiter = "CUT".into();

        let child = cfg.for_path(Path::new("/exports/job.dsx"));
        assert_eq!(child.target_path, PathBuf::from("/exports/job.dsx"));
        assert_eq!(child.delimiter, "CUT");
        assert!(child.recursive && child.force);
        assert_eq!(cfg.target_path, PathBuf::from("/exports"));
    }
}
