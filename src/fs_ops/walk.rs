//! Recursive directory stripping.
//!
//! Directories are listed one level at a time so the operator can be asked before
//! each descent. Entries are visited in file-name order, depth-first. Links are
//! not followed; anything that is neither a regular file nor a directory is skipped.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::RunConfig;
use crate::errors::StripError;
use crate::output as out;
use crate::prompt::Gate;
use crate::report::{Outcome, Report};

use super::helpers::io_error_with_help;
use super::truncate::strip_file;

/// Walk the directory named by `config.target_path`, recording every visited
/// path in `report`. Only fatal (prompt) errors are returned; everything else is
/// recorded and the walk continues.
pub fn walk_dir(
    config: &RunConfig,
    gate: &mut Gate<'_>,
    report: &mut Report,
) -> Result<(), StripError> {
    let root = config.target_path.as_path();

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            out::print_info(&format!("`{}` is not a directory", root.display()));
            report.record(root, Outcome::NotADirectory);
            return Ok(());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            out::print_info(&format!("`{}` does not exist", root.display()));
            report.record(root, Outcome::NotADirectory);
            return Ok(());
        }
        Err(e) => {
            report.record_failure(root, io_error_with_help("inspect", root)(e));
            return Ok(());
        }
    }

    walk_level(config, gate, report, false)
}

/// Process one directory level. `auto_confirm` is true once a descent into this
/// branch has been affirmed, so nested directories are entered without asking.
fn walk_level(
    config: &RunConfig,
    gate: &mut Gate<'_>,
    report: &mut Report,
    auto_confirm: bool,
) -> Result<(), StripError> {
    let dir = config.target_path.as_path();
    let mut descend = auto_confirm;

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let (path, err) = list_error(dir, e);
                report.record_failure(&path, err);
                continue;
            }
        };
        let path = entry.path();
        let ftype = entry.file_type();
        let child = config.for_path(path);

        if ftype.is_file() {
            match strip_file(&child, gate) {
                Ok(outcome) => report.record(path, outcome),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => report.record_failure(path, e),
            }
        } else if ftype.is_dir() {
            if !descend {
                let question = format!("Strip files in `{}`?", path.display());
                if !gate.confirm(&question, Some(true))? {
                    debug!(path = %path.display(), "directory declined");
                    report.record(path, Outcome::DirectoryDeclined);
                    continue;
                }
                descend = true;
            }
            walk_level(&child, gate, report, true)?;
        } else {
            debug!(path = %path.display(), "not a regular file or directory; skipping");
            report.record(path, Outcome::Skipped);
        }
    }
    Ok(())
}

fn list_error(dir: &Path, e: walkdir::Error) -> (std::path::PathBuf, StripError) {
    let path = e.path().unwrap_or(dir).to_path_buf();
    let err = match e.into_io_error() {
        Some(ioe) => io_error_with_help("list", &path)(ioe),
        None => StripError::Io {
            op: "list",
            message: format!("list '{}': directory walk failed", path.display()),
            path: path.clone(),
        },
    };
    (path, err)
}
