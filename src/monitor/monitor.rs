//! The monitor and its sampling loop.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dlwatch::monitor::MonitorBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> dlwatch::Result<()> {
//! let monitor = MonitorBuilder::single("file.zip", PathBuf::from("file.zip"), Some(1_048_576)).build()?;
//!
//! // Prints "Downloading file.zip ..." and starts redrawing the progress line.
//! let handle = monitor.start();
//!
//! // ... the downloader writes file.zip ...
//!
//! // Finishes the current tick, draws the last frame and prints the outcome.
//! let report = handle.stop().await?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

use super::config::MonitorConfig;
use super::report::Report;
use super::state::{MonitorState, SharedState};
use crate::error::{Error, Result};
use crate::progress::{render_frame, ProgressDisplay};
use crate::sample::SampleCollector;
use crate::session::{Session, Transfer};

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Observes a transfer and renders its progress until told to stop.
///
/// A monitor is created [`Idle`](MonitorState::Idle) by a
/// [`MonitorBuilder`](super::MonitorBuilder) and consumed by [`Monitor::start`].
pub struct Monitor {
    name: String,
    transfer: Transfer,
    config: MonitorConfig,
    shared: Arc<SharedState>,
}

impl fmt::Debug for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("name", &self.name)
            .field("transfer", &self.transfer)
            .field("config", &self.config)
            .field("state", &self.shared.load())
            .finish()
    }
}

impl Monitor {
    pub(crate) fn new(name: String, transfer: Transfer, config: MonitorConfig) -> Self {
        Self {
            name,
            transfer,
            config,
            shared: Arc::new(SharedState::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> MonitorState {
        self.shared.load()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Full path of the observed file, as printed on success.
    pub fn destination(&self) -> PathBuf {
        self.config.directory.join(&self.name)
    }

    /// Announce the transfer and spawn the sampling loop on the current tokio
    /// runtime.
    pub fn start(self) -> MonitorHandle {
        let display = ProgressDisplay::new(&self.config.style_options);
        display.println(format!("Downloading {} ...", self.name));
        debug!(name = %self.name, parts = self.transfer.len(), "monitor started");

        self.shared.store(MonitorState::Running);
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(run(self, display));

        MonitorHandle {
            shared,
            task: Some(task),
        }
    }

    /// Monitor the transfer for as long as `transfer` runs, then stop and
    /// report.
    pub async fn watch<F: Future>(self, transfer: F) -> Result<(F::Output, Report)> {
        let handle = self.start();
        let output = transfer.await;
        let report = handle.stop().await?;
        Ok((output, report))
    }
}

/// Controls a started [`Monitor`].
///
/// Dropping the handle without calling [`MonitorHandle::stop`] still signals
/// the loop to stop; the report is then only printed and logged.
#[derive(Debug)]
pub struct MonitorHandle {
    shared: Arc<SharedState>,
    task: Option<JoinHandle<Report>>,
}

impl MonitorHandle {
    pub fn state(&self) -> MonitorState {
        self.shared.load()
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Number of sampling ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.shared.ticks()
    }

    /// Ask the loop to stop after its current tick. Returns `false` if it was
    /// already stopping or terminated.
    pub fn signal_stop(&self) -> bool {
        self.shared.begin_stop()
    }

    /// Stop the loop and wait for the final frame and report.
    pub async fn stop(mut self) -> Result<Report> {
        self.signal_stop();
        let task = self
            .task
            .take()
            .ok_or_else(|| Error::Internal("monitor task already joined".to_string()))?;
        task.await
            .map_err(|e| Error::Internal(format!("monitor task failed: {}", e)))
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.signal_stop();
    }
}

/// Sample, render and repeat until stopped, then report.
async fn run(monitor: Monitor, display: ProgressDisplay) -> Report {
    let destination = monitor.destination();
    let Monitor {
        name,
        transfer,
        config,
        shared,
    } = monitor;
    let style = &config.style_options;

    let mut session = Session::new(name, &transfer, style);
    let mut collector = SampleCollector::new(config.interval_for(&transfer));
    let mut tick = 0;

    // The flag is only checked between ticks, so a stop lets the current
    // measurement finish.
    while shared.is_running() {
        let sample = collector.sample(transfer.targets()).await;
        session.apply(sample);
        shared.record_tick();
        display.draw(render_frame(&session, style.spinner_glyph(tick), style));
        tick += 1;
    }

    let reading = collector.read_in_background(transfer.targets()).await;
    session.refresh(&reading);
    let final_frame = render_frame(&session, style.spinner_glyph(0), style);

    let report = Report::new(
        &session,
        destination,
        shared.ticks(),
        collector.failures(),
        final_frame,
    );
    let message = report.message();
    display.finish(report.final_frame(), &message);
    config.logger.log(report.level(), &message);
    debug!(
        name = %report.name(),
        ticks = report.ticks(),
        sample_failures = report.sample_failures(),
        "monitor terminated"
    );

    shared.store(MonitorState::Terminated);
    report
}
