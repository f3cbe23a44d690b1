#![allow(dead_code)]

use filetime::FileTime;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use strip_dsx::{Confirm, StripError};

/// Answers questions from a fixed script and remembers what was asked.
/// Running out of answers behaves like a closed terminal.
pub struct Scripted {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl Scripted {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for Scripted {
    fn ask(&mut self, question: &str, _default: Option<bool>) -> Result<bool, StripError> {
        self.asked.push(question.to_string());
        self.answers.pop_front().ok_or(StripError::InputClosed)
    }
}

pub fn old() -> FileTime {
    FileTime::from_unix_time(1_000_000, 0)
}

/// Backdate `path` so a later rewrite is detectable through its mtime.
pub fn backdate(path: &Path) {
    filetime::set_file_mtime(path, old()).unwrap();
}

pub fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
}
