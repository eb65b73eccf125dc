//! Sampling of growing files.
//!
//! # Overview
//!
//! - `probe` - The [`SizeProbe`] trait and its implementations
//! - `collector` - The [`SampleCollector`] turning probes into per-tick rates
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//! use dlwatch::sample::SampleCollector;
//! use dlwatch::session::TransferTarget;
//!
//! let written = Arc::new(AtomicU64::new(0));
//! let targets = vec![TransferTarget::new(written.clone(), Some(1_000))];
//! let mut collector = SampleCollector::new(Duration::from_millis(250));
//!
//! let first = collector.read(&targets);
//! written.store(250, Ordering::Release);
//! let second = collector.read(&targets);
//!
//! let sample = collector.compare(&first, &second);
//! assert_eq!(sample.parts[0].size, Some(250));
//! assert_eq!(sample.parts[0].rate, 1_000);
//! ```

pub mod collector;
pub mod probe;

pub use collector::{rate_per_sec, PartSample, Reading, SampleCollector, TickSample};
pub use probe::{ProbeFn, SizeProbe};
