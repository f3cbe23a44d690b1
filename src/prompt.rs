//! Interactive yes/no confirmation.
//!
//! [`Prompter`] asks on any `BufRead`/`Write` pair (stdin/stdout in the binary,
//! in-memory buffers in tests). [`Gate`] puts force mode in front of it: a forced
//! gate affirms every question without touching the prompter at all.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

use crate::errors::StripError;

const GUIDANCE: &str = "Please respond with 'yes' or 'no' (or 'y' or 'n').";

/// Something that can answer a yes/no question.
pub trait Confirm {
    /// Ask `question`. `default` is returned for an empty answer; `None` means
    /// an explicit answer is required.
    fn ask(&mut self, question: &str, default: Option<bool>) -> Result<bool, StripError>;
}

/// Map a normalized answer to a decision.
fn parse_answer(choice: &str) -> Option<bool> {
    match choice {
        "yes" | "y" | "ye" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

fn suffix(default: Option<bool>) -> &'static str {
    match default {
        Some(true) => " [Y/n] ",
        Some(false) => " [y/N] ",
        None => " [y/n] ",
    }
}

/// Line-oriented prompter. Blocks until an answer is recognized; end of input
/// is an error rather than an endless re-prompt.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompter<R, W> {
    fn ask(&mut self, question: &str, default: Option<bool>) -> Result<bool, StripError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{question}{}", suffix(default)).map_err(StripError::Prompt)?;
            self.output.flush().map_err(StripError::Prompt)?;

            line.clear();
            let n = self.input.read_line(&mut line).map_err(StripError::Prompt)?;
            if n == 0 {
                return Err(StripError::InputClosed);
            }

            let choice = line.trim().to_lowercase();
            if choice.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            } else if let Some(answer) = parse_answer(&choice) {
                debug!(question, answer, "confirmation answered");
                return Ok(answer);
            }
            writeln!(self.output, "{GUIDANCE}\n").map_err(StripError::Prompt)?;
        }
    }
}

/// Confirmation gate honoring force mode.
pub struct Gate<'a> {
    force: bool,
    prompter: &'a mut dyn Confirm,
}

impl<'a> Gate<'a> {
    pub fn new(force: bool, prompter: &'a mut dyn Confirm) -> Self {
        Self { force, prompter }
    }

    pub fn confirm(&mut self, question: &str, default: Option<bool>) -> Result<bool, StripError> {
        if self.force {
            return Ok(true);
        }
        self.prompter.ask(question, default)
    }
}
