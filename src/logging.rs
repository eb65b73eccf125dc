//! Outcome logging and subscriber setup.
//!
//! The final report of a monitor is handed to an [`OutcomeLog`], the
//! application's log sink. [`TracingLog`] forwards it to `tracing`; an
//! application with its own log file plugs in its own implementation.

use std::fmt;
use tracing_subscriber::EnvFilter;

/// Severity of an outcome entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log sink receiving the completion or failure line of a monitor.
pub trait OutcomeLog: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// [`OutcomeLog`] writing through the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl OutcomeLog for TracingLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }
}

/// Initialize logging to stderr, filtered by `RUST_LOG` (default
/// `info,dlwatch=debug`). Does nothing if a subscriber is already installed.
pub fn init_stderr() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dlwatch=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
