//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path and an actionable hint, and
//! turns it into a [`StripError::Io`].
//!
//! Usage:
//!   fs::write(path, prefix).map_err(io_error_with_help("write", path))?;

use std::io;
use std::path::Path;

use crate::errors::StripError;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" - permission denied; check ownership and write permissions.");
                }
                libc::ENOENT => {
                    msg.push_str(" - path not found; it may have been removed during the run.");
                }
                libc::EISDIR => {
                    msg.push_str(" - is a directory; use `-r` to strip directories.");
                }
                libc::ENOSPC => {
                    msg.push_str(" - insufficient space on device.");
                }
                libc::EROFS => {
                    msg.push_str(" - read-only filesystem; cannot write here.");
                }
                libc::ELOOP => {
                    msg.push_str(" - too many symbolic link levels; possible symlink cycle.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" - filename or path too long.");
                }
                libc::EMFILE | libc::ENFILE => {
                    msg.push_str(" - open file limit reached.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" - access denied; check permissions."),
                2 | 3 => msg.push_str(" - path not found; it may have been removed during the run."),
                32 => msg.push_str(" - sharing violation; file is in use."),
                112 => msg.push_str(" - insufficient disk space."),
                19 => msg.push_str(" - write protected / read-only media."),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" - permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" - path not found; it may have been removed during the run.");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error into StripError.
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> StripError + 'a {
    move |e: io::Error| StripError::Io {
        op,
        path: path.to_path_buf(),
        message: build_message(op, path, &e),
    }
}
