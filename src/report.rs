//! Per-path outcomes and the aggregate report of a run.
//!
//! Every visited path ends up either as an [`Outcome`] entry or as a failure.
//! The binary derives its exit code from the aggregate.

use std::path::{Path, PathBuf};
use tracing::error;

use crate::errors::StripError;

/// What happened to a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Content from the delimiter onward was removed (`removed` bytes).
    Truncated { removed: usize },
    /// Dry-run: the file would lose `removed` bytes.
    WouldTruncate { removed: usize },
    /// Delimiter absent; file left untouched, nothing written.
    NoDelimiter,
    /// Extension is not `dsx`; not prompted, not read.
    WrongExtension,
    /// Operator answered no for this file.
    Declined,
    /// Operator answered no for this directory; nothing below it was visited.
    DirectoryDeclined,
    /// Neither a regular file nor a directory (symlink, device, socket...).
    Skipped,
    /// Target is missing or not a regular file.
    NotAFile,
    /// Target is missing or not a directory.
    NotADirectory,
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::Truncated { .. } | Outcome::WouldTruncate { .. })
    }
}

#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(PathBuf, Outcome)>,
    failures: Vec<(PathBuf, StripError)>,
    aborted: Option<StripError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &Path, outcome: Outcome) {
        self.entries.push((path.to_path_buf(), outcome));
    }

    /// Record a non-fatal failure and log it with structured fields.
    pub fn record_failure(&mut self, path: &Path, err: StripError) {
        error!(
            code = err.code(),
            kind = err.kind(),
            path = %path.display(),
            error = %err,
            "Strip failed"
        );
        self.failures.push((path.to_path_buf(), err));
    }

    /// Mark the run as stopped early by a fatal error. Entries and failures
    /// recorded so far are kept.
    pub fn abort(&mut self, err: StripError) {
        error!(code = err.code(), kind = err.kind(), error = %err, "Run aborted");
        self.aborted = Some(err);
    }

    /// The fatal error that stopped the run, if any.
    pub fn aborted(&self) -> Option<&StripError> {
        self.aborted.as_ref()
    }

    /// True when the run finished with no failure and no abort.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.aborted.is_none()
    }

    pub fn entries(&self) -> &[(PathBuf, Outcome)] {
        &self.entries
    }

    pub fn failures(&self) -> &[(PathBuf, StripError)] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Outcome recorded for `path`, if it was visited.
    pub fn outcome_of(&self, path: &Path) -> Option<Outcome> {
        self.entries.iter().find(|(p, _)| p == path).map(|(_, o)| *o)
    }

    pub fn truncated(&self) -> usize {
        self.count(|o| o.is_change())
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::NoDelimiter))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::WrongExtension | Outcome::Skipped))
    }

    pub fn declined(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Declined | Outcome::DirectoryDeclined))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}
