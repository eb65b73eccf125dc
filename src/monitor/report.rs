//! Final outcome of a monitored transfer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dlwatch::monitor::{Report, Status};
//!
//! fn print(report: &Report) {
//!     match report.status() {
//!         Status::Success => println!("{} is complete", report.name()),
//!         Status::Fail(detail) => println!("{} is incomplete: {}", report.name(), detail),
//!     }
//! }
//! ```

use crate::logging::LogLevel;
use crate::session::Session;
use crate::utils::format_bytes;

use std::path::{Path, PathBuf};

/// Transfer status as observed when the monitor was stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Every part reached its expected size.
    Success,
    /// At least one part did not; the message lists them.
    Fail(String),
}

/// Represents the outcome of a monitored transfer.
#[derive(Debug, Clone)]
pub struct Report {
    name: String,
    status: Status,
    observed: u64,
    expected: Option<u64>,
    parts: Vec<u64>,
    destination: PathBuf,
    ticks: u64,
    sample_failures: u64,
    final_frame: String,
}

impl Report {
    /// Build the report of a session at stop time.
    pub(crate) fn new(
        session: &Session,
        destination: PathBuf,
        ticks: u64,
        sample_failures: u64,
        final_frame: String,
    ) -> Self {
        let totals = session.totals();
        let status = if session.is_complete() {
            Status::Success
        } else {
            Status::Fail(shortfall(session))
        };

        Self {
            name: session.name().to_string(),
            status,
            observed: totals.observed,
            expected: totals.expected,
            parts: session.parts().iter().map(|part| part.observed()).collect(),
            destination,
            ticks,
            sample_failures,
            final_frame,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Bytes observed across all parts at stop time.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Sum of the expected sizes, if all of them were known.
    pub fn expected(&self) -> Option<u64> {
        self.expected
    }

    /// Bytes observed per part at stop time.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Full path of the downloaded file.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Number of completed sampling ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of size probes that failed and were skipped.
    pub fn sample_failures(&self) -> u64 {
        self.sample_failures
    }

    /// The last progress line drawn.
    pub fn final_frame(&self) -> &str {
        &self.final_frame
    }

    /// Severity the outcome is logged with.
    pub fn level(&self) -> LogLevel {
        match self.status {
            Status::Success => LogLevel::Info,
            Status::Fail(_) => LogLevel::Error,
        }
    }

    /// The line printed and logged for this outcome.
    pub fn message(&self) -> String {
        match &self.status {
            Status::Success => format!(
                "Downloaded {} of size {} at {} successfully !",
                self.name,
                format_bytes(self.observed),
                self.destination.display()
            ),
            Status::Fail(detail) => format!("Download failed! {}", detail),
        }
    }
}

fn shortfall(session: &Session) -> String {
    session
        .parts()
        .iter()
        .enumerate()
        .filter(|(_, part)| !part.is_complete())
        .map(|(index, part)| {
            let label = if session.is_multi_part() {
                format!("part {}", index + 1)
            } else {
                session.name().to_string()
            };
            match part.expected() {
                Some(expected) => {
                    format!("{}: {} of {} bytes", label, part.observed(), expected)
                }
                None => format!("{}: size could not be read", label),
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
