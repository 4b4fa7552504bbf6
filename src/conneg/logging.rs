//! Logging functions for the JSON result responder
//!
//! Uses Rust's standard `log` crate with a custom logger that writes to
//! stderr, so messages appear in Docker logs and the host's error log.

use log::{Log, Metadata, Record};
use std::sync::Once;

/// Simple logger that writes to stderr
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[json-conneg][{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;
static INIT: Once = Once::new();

/// Initialize the logger
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init() {
    INIT.call_once(|| {
        // set_logger only fails if a logger is already installed, which
        // can happen when the host application brought its own
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Debug);
        }
    });
}

/// Log a message at a named level
#[inline]
pub fn log_message(level: &str, message: &str) {
    init();

    match level {
        "error" => log::error!("{}", message),
        "warn" => log::warn!("{}", message),
        "info" => log::info!("{}", message),
        "debug" => log::debug!("{}", message),
        _ => log::error!("{}", message),
    }
}

/// Log an error message
#[inline]
pub fn log_error(message: &str) {
    log_message("error", message);
}

/// Log a warning message
#[inline]
pub fn log_warn(message: &str) {
    log_message("warn", message);
}

/// Log an info message
#[inline]
pub fn log_info(message: &str) {
    log_message("info", message);
}

/// Log a debug message
#[inline]
pub fn log_debug(message: &str) {
    log_message("debug", message);
}
