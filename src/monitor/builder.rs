//! Builder pattern implementation for creating Monitor instances.
//!
//! # Examples
//!
//! ## Single Stream
//!
//! ```rust
//! use dlwatch::monitor::MonitorBuilder;
//! use std::path::PathBuf;
//!
//! # fn example() -> dlwatch::Result<()> {
//! let monitor = MonitorBuilder::single("debian.iso", PathBuf::from("downloads/debian.iso"), Some(4_000_000))
//!     .directory(PathBuf::from("downloads"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Parts Downloaded in Parallel
//!
//! ```rust
//! use dlwatch::monitor::MonitorBuilder;
//! use dlwatch::session::Transfer;
//! use std::path::PathBuf;
//!
//! # fn example() -> dlwatch::Result<()> {
//! let parts = vec![PathBuf::from("debian.iso.0"), PathBuf::from("debian.iso.1")];
//! let transfer = Transfer::multi_part(parts, vec![2_000_000, 2_000_000])?;
//! let monitor = MonitorBuilder::new("debian.iso", transfer).hidden().build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::MonitorConfig, monitor::Monitor};
use crate::error::{Error, Result};
use crate::logging::OutcomeLog;
use crate::progress::StyleOptions;
use crate::sample::SizeProbe;
use crate::session::Transfer;

use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create a [`Monitor`].
pub struct MonitorBuilder {
    name: String,
    transfer: Transfer,
    config: MonitorConfig,
}

impl MonitorBuilder {
    /// Creates a builder with the default options.
    pub fn new(name: impl Into<String>, transfer: Transfer) -> Self {
        Self {
            name: name.into(),
            transfer,
            config: MonitorConfig::default(),
        }
    }

    /// Creates a builder for a single stream with an optional expected size.
    pub fn single<P: SizeProbe + 'static>(
        name: impl Into<String>,
        probe: P,
        expected: Option<u64>,
    ) -> Self {
        Self::new(name, Transfer::single(probe, expected))
    }

    /// Convenience function to hide the progress line and report lines.
    pub fn hidden(mut self) -> Self {
        self.config.style_options = StyleOptions::hidden();
        self
    }

    /// Sets the directory the file is written to.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the progress line style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set the sampling interval of a single stream.
    pub fn single_stream_interval(mut self, interval: Duration) -> Self {
        self.config.single_stream_interval = interval;
        self
    }

    /// Set the sampling interval of a multi-part transfer.
    pub fn multi_part_interval(mut self, interval: Duration) -> Self {
        self.config.multi_part_interval = interval;
        self
    }

    /// Set the sink receiving the completion or failure line.
    pub fn logger<L: OutcomeLog + 'static>(self, logger: L) -> Self {
        self.shared_logger(Arc::new(logger))
    }

    /// Set a shared sink receiving the completion or failure line.
    pub fn shared_logger(mut self, logger: Arc<dyn OutcomeLog>) -> Self {
        self.config.logger = logger;
        self
    }

    /// Create the [`Monitor`], rejecting transfers and settings that cannot
    /// be monitored.
    pub fn build(self) -> Result<Monitor> {
        self.transfer.validate()?;
        if self.config.interval_for(&self.transfer).is_zero() {
            return Err(Error::InvalidInterval);
        }
        Ok(Monitor::new(self.name, self.transfer, self.config))
    }
}
