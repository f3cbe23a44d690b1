//! Single-file stripping.
//! Reads the whole file, cuts at the first literal occurrence of the delimiter and
//! overwrites the file with the prefix. Files without the delimiter are never written.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{EXPECTED_EXTENSION, RunConfig};
use crate::errors::StripError;
use crate::output as out;
use crate::prompt::Gate;
use crate::report::Outcome;

use super::helpers::io_error_with_help;

/// Text preceding the first occurrence of `delimiter`, or None when it is absent.
/// An empty delimiter never matches.
pub fn prefix_before<'t>(text: &'t str, delimiter: &str) -> Option<&'t str> {
    if delimiter.is_empty() {
        return None;
    }
    text.find(delimiter).map(|cut| &text[..cut])
}

/// True when the final dot-segment of the file name is exactly `dsx`.
pub fn has_expected_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXPECTED_EXTENSION)
}

/// Strip `path` in place. No extension check, no confirmation.
pub fn truncate_file(path: &Path, delimiter: &str, dry_run: bool) -> Result<Outcome, StripError> {
    let bytes = fs::read(path).map_err(io_error_with_help("read", path))?;
    let text = String::from_utf8(bytes).map_err(|_| StripError::Decode {
        path: path.to_path_buf(),
    })?;

    let Some(prefix) = prefix_before(&text, delimiter) else {
        debug!(path = %path.display(), "delimiter not found; leaving file untouched");
        return Ok(Outcome::NoDelimiter);
    };
    let removed = text.len() - prefix.len();

    if dry_run {
        info!(
            path = %path.display(),
            kept = prefix.len(),
            removed,
            "dry-run: would strip file"
        );
        return Ok(Outcome::WouldTruncate { removed });
    }

    fs::write(path, prefix).map_err(io_error_with_help("write", path))?;
    info!(path = %path.display(), kept = prefix.len(), removed, "Stripped file");
    Ok(Outcome::Truncated { removed })
}

/// Strip the file named by `config.target_path`, honoring the extension filter
/// and asking for confirmation unless forced.
pub fn strip_file(config: &RunConfig, gate: &mut Gate<'_>) -> Result<Outcome, StripError> {
    let path = config.target_path.as_path();

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            out::print_info(&format!(
                "`{}` is not a file. Use `-r` to use recursive mode",
                path.display()
            ));
            return Ok(Outcome::NotAFile);
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            out::print_info(&format!("`{}` does not exist", path.display()));
            return Ok(Outcome::NotAFile);
        }
        Err(e) => return Err(io_error_with_help("inspect", path)(e)),
    }

    if !has_expected_extension(path) {
        debug!(path = %path.display(), "not a .{EXPECTED_EXTENSION} file; skipping");
        return Ok(Outcome::WrongExtension);
    }

    if !gate.confirm(&format!("Strip `{}`?", path.display()), Some(true))? {
        debug!(path = %path.display(), "declined");
        return Ok(Outcome::Declined);
    }

    let outcome = truncate_file(path, &config.delimiter, config.dry_run)?;
    match outcome {
        Outcome::Truncated { removed } => out::print_success(&format!(
            "Stripped `{}` ({removed} bytes removed)",
            path.display()
        )),
        Outcome::WouldTruncate { removed } => out::print_info(&format!(
            "Dry-run: would strip `{}` ({removed} bytes)",
            path.display()
        )),
        _ => {}
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_cut_at_first_occurrence() {
        assert_eq!(prefix_before("JOB A\nEND\nEND", "END"), Some("JOB A\n"));
        assert_eq!(prefix_before("END tail", "END"), Some(""));
        assert_eq!(prefix_before("nothing", "END"), None);
        assert_eq!(prefix_before("", "END"), None);
    }

    #[test]
    fn match_is_literal_and_case_sensitive() {
        assert_eq!(prefix_before("a begin dsexecjob b", "BEGIN DSEXECJOB"), None);
        assert_eq!(prefix_before("a.*b", ".*"), Some("a"));
    }

    #[test]
    fn empty_delimiter_never_matches() {
        assert_eq!(prefix_before("anything", ""), None);
    }

    #[test]
    fn extension_check_is_exact() {
        assert!(has_expected_extension(Path::new("jobs/a.dsx")));
        assert!(has_expected_extension(Path::new("a.b.dsx")));
        assert!(!has_expected_extension(Path::new("a.DSX")));
        assert!(!has_expected_extension(Path::new("a.dsx.bak")));
        assert!(!has_expected_extension(Path::new("dsx")));
        assert!(!has_expected_extension(Path::new(".dsx")));
    }
}
