use tracing::debug;

use crate::config::RunConfig;
use crate::prompt::Gate;
use crate::report::Report;

use super::truncate::strip_file;
use super::walk::walk_dir;

/// Top-level dispatcher.
/// - Recursive mode walks `target_path` as a directory tree.
/// - Otherwise `target_path` is stripped as a single file.
///
/// Per-file failures land in the returned report. A fatal error (confirmation
/// input closed or unreadable) stops the run and is stored as
/// [`Report::aborted`] next to everything recorded before it.
pub fn run(config: &RunConfig, gate: &mut Gate<'_>) -> Report {
    debug!(
        path = %config.target_path.display(),
        recursive = config.recursive,
        force = config.force,
        dry_run = config.dry_run,
        "dispatch run"
    );

    let mut report = Report::new();
    if config.recursive {
        if let Err(e) = walk_dir(config, gate, &mut report) {
            report.abort(e);
        }
    } else {
        match strip_file(config, gate) {
            Ok(outcome) => report.record(&config.target_path, outcome),
            Err(e) if e.is_fatal() => report.abort(e),
            Err(e) => report.record_failure(&config.target_path, e),
        }
    }
    report
}
