mod common;

use assert_fs::prelude::*;
use std::fs;
use strip_dsx::{DEFAULT_DELIMITER, Outcome, StripError, truncate_file};

use common::{backdate, mtime, old};

#[test]
fn cuts_at_delimiter_and_drops_the_tail() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("job.dsx");
    job.write_str("JOB A\nBEGIN DSEXECJOB\nBINARYBLOB").unwrap();

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    assert_eq!(outcome, Outcome::Truncated { removed: 26 });
    job.assert("JOB A\n");
}

#[test]
fn missing_delimiter_leaves_bytes_and_mtime_alone() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("job.dsx");
    job.write_str("no marker here").unwrap();
    backdate(job.path());

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    assert_eq!(outcome, Outcome::NoDelimiter);
    assert_eq!(fs::read(job.path()).unwrap(), b"no marker here");
    assert_eq!(mtime(job.path()), old(), "file must not be rewritten");
}

#[test]
fn empty_file_is_never_written() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("empty.dsx");
    job.touch().unwrap();
    backdate(job.path());

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    assert_eq!(outcome, Outcome::NoDelimiter);
    assert_eq!(fs::metadata(job.path()).unwrap().len(), 0);
    assert_eq!(mtime(job.path()), old());
}

#[test]
fn only_first_occurrence_counts() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("twice.dsx");
    job.write_str("header\nEND one\nmiddle\nEND two\n").unwrap();

    truncate_file(job.path(), "END", false).unwrap();

    job.assert("header\n");
}

#[test]
fn delimiter_at_start_empties_the_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("compiled_only.dsx");
    job.write_str("BEGIN DSEXECJOB\nstuff").unwrap();

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    assert_eq!(outcome, Outcome::Truncated { removed: 21 });
    job.assert("");
}

#[test]
fn delimiter_match_is_case_sensitive() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("lower.dsx");
    job.write_str("keep\nbegin dsexecjob\nkeep too").unwrap();

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    assert_eq!(outcome, Outcome::NoDelimiter);
    job.assert("keep\nbegin dsexecjob\nkeep too");
}

#[test]
fn multibyte_text_before_delimiter_survives() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("utf8.dsx");
    job.write_str("Größe → ok\nBEGIN DSEXECJOB\n").unwrap();

    truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    job.assert("Größe → ok\n");
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("job.dsx");
    job.write_str("JOB A\nBEGIN DSEXECJOB\nBINARYBLOB").unwrap();
    backdate(job.path());

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, true).unwrap();

    assert_eq!(outcome, Outcome::WouldTruncate { removed: 26 });
    job.assert("JOB A\nBEGIN DSEXECJOB\nBINARYBLOB");
    assert_eq!(mtime(job.path()), old());
}

#[test]
fn invalid_utf8_is_a_decode_failure_and_file_is_untouched() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("binary.dsx");
    let bytes = [b'J', b'O', b'B', 0xff, 0xfe, b'\n'];
    fs::write(job.path(), bytes).unwrap();

    let err = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap_err();

    assert!(matches!(err, StripError::Decode { ref path } if path == job.path()));
    assert!(!err.is_fatal());
    assert_eq!(fs::read(job.path()).unwrap(), bytes);
}

#[test]
fn unreadable_path_is_an_io_error_naming_the_path() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.child("gone.dsx");

    let err = truncate_file(missing.path(), DEFAULT_DELIMITER, false).unwrap_err();

    assert!(matches!(err, StripError::Io { op: "read", .. }));
    assert!(err.to_string().contains("gone.dsx"));
}

#[test]
fn crlf_line_endings_in_the_prefix_are_kept() {
    let dir = assert_fs::TempDir::new().unwrap();
    let job = dir.child("job.dsx");
    job.write_str("JOB A\r\nLINE 2\r\nBEGIN DSEXECJOB\r\nBLOB").unwrap();

    let outcome = truncate_file(job.path(), DEFAULT_DELIMITER, false).unwrap();

    assert!(matches!(outcome, Outcome::Truncated { .. }));
    assert_eq!(fs::read(job.path()).unwrap(), b"JOB A\r\nLINE 2\r\n");
}
