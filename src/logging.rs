#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::sync::OnceLock;
use std::time::Instant;

/// Environment variable consulted when no level is given explicitly.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Writes `[  0.012s DEBUG seabattle::controller] message` lines to stderr,
/// timed from logger installation.
struct SimpleLogger {
    start: OnceLock<Instant>,
}

impl SimpleLogger {
    fn elapsed_secs(&self) -> f64 {
        self.start.get_or_init(Instant::now).elapsed().as_secs_f64()
    }
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:>8.3}s {:<5} {}] {}",
                self.elapsed_secs(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger {
    start: OnceLock::new(),
};

/// Level from `SEABATTLE_LOG`, or `info` if it is unset or unparsable.
pub fn env_level() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger. An explicit `level` wins over `SEABATTLE_LOG`.
///
/// Installing twice keeps the first logger but still applies the new level.
/// Returns the level in effect.
pub fn init_logging_with(level: Option<LevelFilter>) -> LevelFilter {
    let level = level.unwrap_or_else(env_level);
    LOGGER.start.get_or_init(Instant::now);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    level
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_with(None);
}
