//! Tracing initialization.
//! Builds a subscriber with EnvFilter and either a compact or a JSON formatter.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Diagnostic logs go to stderr; stdout carries prompts and results.

use anyhow::{Result, anyhow};
use chrono::Local;
use std::fmt as stdfmt;
use strip_dsx::LogLevel;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// Initialize the global subscriber for this process.
pub fn init_tracing(lvl: LogLevel, json: bool) -> Result<()> {
    let env_filter = EnvFilter::default().add_directive(to_level_filter(lvl).into());

    let installed = if json {
        let layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(std::io::stderr);
        registry().with(env_filter).with(layer).try_init()
    } else {
        let layer = tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(false)
            .compact()
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr);
        registry().with(env_filter).with(layer).try_init()
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
