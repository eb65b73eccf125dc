//! Configuration structure and defaults for the monitor.
//!
//! # Examples
//!
//! ```rust
//! use dlwatch::monitor::MonitorConfig;
//! use std::time::Duration;
//!
//! let config = MonitorConfig::default();
//! assert_eq!(config.single_stream_interval, Duration::from_millis(250));
//! assert_eq!(config.multi_part_interval, Duration::from_millis(300));
//! ```

use crate::logging::{OutcomeLog, TracingLog};
use crate::progress::StyleOptions;
use crate::session::Transfer;

use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Configuration structure for the monitor
#[derive(Clone)]
pub struct MonitorConfig {
    /// Directory the observed file is written to.
    pub directory: PathBuf,
    /// Progress line style options.
    pub style_options: StyleOptions,
    /// Sleep between the two readings of a tick for a single stream.
    pub single_stream_interval: Duration,
    /// Sleep between the two readings of a tick for a multi-part transfer.
    pub multi_part_interval: Duration,
    /// Sink receiving the completion or failure line.
    pub logger: Arc<dyn OutcomeLog>,
}

impl MonitorConfig {
    /// Sampling interval used for `transfer`.
    pub fn interval_for(&self, transfer: &Transfer) -> Duration {
        if transfer.is_multi_part() {
            self.multi_part_interval
        } else {
            self.single_stream_interval
        }
    }
}

impl std::fmt::Debug for MonitorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorConfig")
            .field("directory", &self.directory)
            .field("style_options", &self.style_options)
            .field("single_stream_interval", &self.single_stream_interval)
            .field("multi_part_interval", &self.multi_part_interval)
            .finish_non_exhaustive()
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            style_options: StyleOptions::default(),
            single_stream_interval: Duration::from_millis(250),
            multi_part_interval: Duration::from_millis(300),
            logger: Arc::new(TracingLog),
        }
    }
}
