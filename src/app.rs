//! Application orchestrator.
//! Initializes logging, binds the confirmation gate to the terminal, runs the
//! strip and maps the resulting report to the process exit code.
//!
//! Exit codes: 0 when every visited file was handled (including "nothing to do"
//! cases such as a missing target), 1 when any file failed or the run aborted.

use std::process::ExitCode;
use tracing::debug;

use strip_dsx::cli::Args;
use strip_dsx::output as out;
use strip_dsx::{Gate, Prompter};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    let json = args.json;
    let cfg = args.into_config();

    if let Err(e) = init_tracing(cfg.log_level, json) {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        return ExitCode::FAILURE;
    }
    debug!(?cfg, "Starting strip-dsx");

    let mut prompter = Prompter::stdio();
    let mut gate = Gate::new(cfg.force, &mut prompter);

    let report = strip_dsx::run(&cfg, &mut gate);

    for (_, err) in report.failures() {
        out::print_error(&err.to_string());
    }
    if let Some(e) = report.aborted() {
        out::print_error(&format!("Run aborted: {e}"));
    }
    if cfg.recursive {
        out::print_summary(&report);
    }

    if !report.is_success() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
