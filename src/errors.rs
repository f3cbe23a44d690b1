//! Typed error definitions for strip-dsx.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StripError {
    /// Filesystem failure; `message` already carries the operation, path and a hint.
    #[error("{message}")]
    Io {
        op: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("Cannot decode '{}' as UTF-8 text", path.display())]
    Decode { path: PathBuf },

    #[error("Confirmation input closed before an answer was given")]
    InputClosed,

    #[error("Failed to read confirmation input: {0}")]
    Prompt(#[source] io::Error),
}

impl StripError {
    /// Stable numeric code, used as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            StripError::Io { .. } => 10,
            StripError::Decode { .. } => 20,
            StripError::InputClosed => 30,
            StripError::Prompt(_) => 31,
        }
    }

    /// Short machine-friendly label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            StripError::Io { .. } => "io",
            StripError::Decode { .. } => "decode",
            StripError::InputClosed => "input_closed",
            StripError::Prompt(_) => "prompt",
        }
    }

    /// Fatal errors abort the whole run instead of being recorded per file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StripError::InputClosed | StripError::Prompt(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_prompt_failures_are_fatal() {
        let decode = StripError::Decode {
            path: PathBuf::from("a.dsx"),
        };
        assert!(!decode.is_fatal());
        assert!(StripError::InputClosed.is_fatal());
        assert!(StripError::Prompt(io::Error::other("tty gone")).is_fatal());
    }

    #[test]
    fn decode_message_names_the_file() {
        let e = StripError::Decode {
            path: PathBuf::from("jobs/a.dsx"),
        };
        assert!(e.to_string().contains("jobs/a.dsx"));
        assert_eq!(e.kind(), "decode");
        assert_eq!(e.code(), 20);
    }
}
