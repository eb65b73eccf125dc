//! Monitor module containing the lifecycle, builder and configuration.
//!
//! # Overview
//!
//! - `monitor` - [`Monitor`], [`MonitorHandle`] and the sampling loop
//! - `builder` - [`MonitorBuilder`] for configuring a monitor
//! - `config` - [`MonitorConfig`] and its defaults
//! - `state` - [`MonitorState`] lifecycle
//! - `report` - [`Report`] and [`Status`] produced when a monitor stops
//!
//! # Examples
//!
//! ```rust
//! use dlwatch::monitor::{MonitorBuilder, MonitorState};
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> dlwatch::Result<()> {
//! let written = Arc::new(AtomicU64::new(0));
//! let monitor = MonitorBuilder::single("notes.txt", written.clone(), Some(1_000))
//!     .hidden()
//!     .build()?;
//! assert_eq!(monitor.state(), MonitorState::Idle);
//!
//! let handle = monitor.start();
//! written.store(1_000, Ordering::Release);
//! let report = handle.stop().await?;
//!
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod monitor;
pub mod report;
pub mod state;

pub use builder::MonitorBuilder;
pub use config::MonitorConfig;
pub use monitor::{Monitor, MonitorHandle};
pub use report::{Report, Status};
pub use state::MonitorState;
