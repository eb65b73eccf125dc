//! Shared utility functions.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`bytes`] - Human-readable byte sizes used by the progress line and reports
//!
//! # Examples
//!
//! ```rust
//! use dlwatch::utils::format_bytes;
//!
//! println!("Downloaded {}", format_bytes(3_500_000));
//! ```

pub mod bytes;

pub use bytes::format_bytes;
