//! Config module.
//! Provides the run configuration, log level type and the shared defaults.
//! Configuration comes from CLI flags only; nothing is read from disk or the environment.

pub mod types;

pub use types::{LogLevel, RunConfig};

/// Marker that starts the compiled segment of a DataStage export.
pub const DEFAULT_DELIMITER: &str = "BEGIN DSEXECJOB";

/// Only files with this extension are stripped (case-sensitive).
pub const EXPECTED_EXTENSION: &str = "dsx";
