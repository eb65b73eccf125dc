//! Error handling for the dlwatch library.
//!
//! Only configuration problems surface as [`Error`]s. Sampling hiccups are
//! counted and logged by the collector, and an incomplete transfer is reported
//! through [`Status::Fail`](crate::monitor::Status::Fail) in the final report.

use thiserror::Error;

/// Errors that can happen when using dlwatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A multi-part transfer was created without any part.
    #[error("no transfer targets were given")]
    NoTargets,

    /// The list of size probes and the list of expected part sizes differ in length.
    ///
    /// Both lists are parallel: the probe at index `i` observes the part whose
    /// expected size is at index `i`.
    #[error("{probes} size probes were given for {sizes} part sizes")]
    TargetCountMismatch {
        /// Number of size probes.
        probes: usize,
        /// Number of expected part sizes.
        sizes: usize,
    },

    /// A sampling interval of zero was configured.
    #[error("sampling interval must be greater than zero")]
    InvalidInterval,

    /// Error from the background monitor task.
    ///
    /// Returned when the task panicked or was cancelled before it could
    /// produce its report.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that can fail with a dlwatch error.
pub type Result<T> = std::result::Result<T, Error>;
