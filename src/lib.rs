//! dlwatch observes files while a downloader writes them and renders a live
//! progress line until it is told the transfer is over.
//!
//! It never touches the network: the downloader writes, dlwatch only looks at
//! how large the output has grown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use dlwatch::{MonitorBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let path = PathBuf::from("output/debian.iso");
//! let monitor = MonitorBuilder::single("debian.iso", path, Some(658_505_728))
//!     .directory(PathBuf::from("output"))
//!     .build()?;
//!
//! let handle = monitor.start();
//! // ... the downloader writes output/debian.iso ...
//! let report = handle.stop().await?;
//! println!("{}", report.message());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`monitor`] - The [`Monitor`] lifecycle, its builder, configuration and report
//! - [`session`] - What is observed ([`Transfer`]) and what was observed ([`Session`])
//! - [`sample`] - Size probes and the per-tick rate measurement
//! - [`progress`] - Bars, progress line frames and terminal display
//! - [`logging`] - The outcome log sink and subscriber setup
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod logging;
pub mod monitor;
pub mod progress;
pub mod sample;
pub mod session;
pub mod utils;

pub use error::{Error, Result};
pub use logging::{LogLevel, OutcomeLog, TracingLog};
pub use monitor::{Monitor, MonitorBuilder, MonitorHandle, MonitorState, Report, Status};
pub use progress::{render_bar, ProgressDisplay, StyleOptions};
pub use sample::{ProbeFn, SampleCollector, SizeProbe};
pub use session::{PartState, Session, Transfer, TransferTarget};
pub use utils::format_bytes;
