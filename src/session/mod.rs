//! Transfer description and the state derived from sampling it.
//!
//! # Overview
//!
//! - `transfer` - [`Transfer`] and [`TransferTarget`], what is observed
//! - `state` - [`Session`] and [`PartState`], what was observed so far
//! - `aggregate` - [`Totals`] across parts
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::AtomicU64;
//! use dlwatch::progress::StyleOptions;
//! use dlwatch::sample::{PartSample, TickSample};
//! use dlwatch::session::{Session, Transfer};
//!
//! # fn main() -> dlwatch::Result<()> {
//! let transfer = Transfer::multi_part(vec![AtomicU64::new(0), AtomicU64::new(0)], vec![100, 300])?;
//! let mut session = Session::new("file.iso", &transfer, &StyleOptions::default());
//!
//! session.apply(TickSample {
//!     parts: vec![
//!         PartSample { size: Some(50), rate: 10 },
//!         PartSample { size: Some(150), rate: 20 },
//!     ],
//! });
//!
//! assert_eq!(session.totals().observed, 200);
//! assert_eq!(session.parts()[1].fraction(), Some(0.5));
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod state;
pub mod transfer;

pub use aggregate::{aggregate, fraction, Totals};
pub use state::{PartState, Session};
pub use transfer::{Transfer, TransferTarget};
