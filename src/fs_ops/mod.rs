//! Filesystem operations: single-file stripping, directory walking and the
//! top-level dispatcher.

mod entry;
mod helpers;
mod truncate;
mod walk;

pub use entry::run;
pub use helpers::io_error_with_help;
pub use truncate::{has_expected_extension, prefix_before, strip_file, truncate_file};
pub use walk::walk_dir;
