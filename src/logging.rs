#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with a level taken from `BROADSIDE_LOG`.
/// Defaults to `info` if the variable is not set or invalid. Calling it
/// again keeps the first logger.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
