//! User-facing console lines.
//! Results and informational notes go to stdout, problems to stderr.
//! A colored tag is used only when the target stream is a TTY.

use owo_colors::OwoColorize;

use crate::report::Report;

#[derive(Debug, Clone, Copy)]
enum Tag {
    Info,
    Warn,
    Error,
    Ok,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "info:",
            Tag::Warn => "warn:",
            Tag::Error => "error:",
            Tag::Ok => "ok:",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tag::Warn | Tag::Error)
    }

    fn render(self, tty: bool) -> String {
        if !tty {
            return self.label().to_string();
        }
        match self {
            Tag::Info => self.label().cyan().bold().to_string(),
            Tag::Warn => self.label().yellow().bold().to_string(),
            Tag::Error => self.label().red().bold().to_string(),
            Tag::Ok => self.label().green().bold().to_string(),
        }
    }
}

fn emit(tag: Tag, msg: &str) {
    if tag.to_stderr() {
        let tag = tag.render(atty::is(atty::Stream::Stderr));
        eprintln!("{tag} {msg}");
    } else {
        let tag = tag.render(atty::is(atty::Stream::Stdout));
        println!("{tag} {msg}");
    }
}

pub fn print_info(msg: &str) {
    emit(Tag::Info, msg);
}

pub fn print_warn(msg: &str) {
    emit(Tag::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Tag::Error, msg);
}

pub fn print_success(msg: &str) {
    emit(Tag::Ok, msg);
}

/// One-line tally printed at the end of a recursive run.
pub fn print_summary(report: &Report) {
    let line = format!(
        "{} stripped, {} unchanged, {} skipped, {} declined, {} failed",
        report.truncated(),
        report.unchanged(),
        report.skipped(),
        report.declined(),
        report.failures().len()
    );
    if report.has_failures() {
        print_warn(&line);
    } else {
        print_info(&line);
    }
}
