//! Read-only size probes for growing files.
//!
//! A [`SizeProbe`] reports how many bytes a target currently holds. Probing
//! never writes and never waits on the writer; a failed probe is a transient
//! condition the collector tolerates.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Something whose current size in bytes can be inspected.
pub trait SizeProbe: Send + Sync {
    /// Current size of the observed target.
    fn current_size(&self) -> io::Result<u64>;
}

/// An open handle to the file being written.
impl SizeProbe for File {
    fn current_size(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

/// A path to the file being written. A file which does not exist yet is
/// reported as an error, so the tick counts as "no change".
impl SizeProbe for PathBuf {
    fn current_size(&self) -> io::Result<u64> {
        Ok(fs::metadata(self)?.len())
    }
}

/// An in-memory byte counter updated by the writer.
impl SizeProbe for AtomicU64 {
    fn current_size(&self) -> io::Result<u64> {
        Ok(self.load(Ordering::Acquire))
    }
}

impl<P: SizeProbe + ?Sized> SizeProbe for Arc<P> {
    fn current_size(&self) -> io::Result<u64> {
        (**self).current_size()
    }
}

impl<P: SizeProbe + ?Sized> SizeProbe for Box<P> {
    fn current_size(&self) -> io::Result<u64> {
        (**self).current_size()
    }
}

/// Adapt a closure into a [`SizeProbe`].
///
/// ```rust
/// use dlwatch::sample::{ProbeFn, SizeProbe};
///
/// let probe = ProbeFn(|| Ok::<u64, std::io::Error>(42));
/// assert_eq!(probe.current_size().unwrap(), 42);
/// ```
pub struct ProbeFn<F>(pub F);

impl<F> SizeProbe for ProbeFn<F>
where
    F: Fn() -> io::Result<u64> + Send + Sync,
{
    fn current_size(&self) -> io::Result<u64> {
        (self.0)()
    }
}
