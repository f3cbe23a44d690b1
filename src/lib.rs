//! Core library for `strip-dsx`.
//!
//! Removes the compiled trailing segment of DataStage `.dsx` exports by cutting
//! each file at the first occurrence of a delimiter (`BEGIN DSEXECJOB` by default).
//! Works on a single file or walks a directory tree, asking before each change
//! unless forced.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod prompt;
pub mod report;

pub use config::{DEFAULT_DELIMITER, EXPECTED_EXTENSION, LogLevel, RunConfig};
pub use errors::StripError;
pub use fs_ops::{run, strip_file, truncate_file, walk_dir};
pub use prompt::{Confirm, Gate, Prompter};
pub use report::{Outcome, Report};
