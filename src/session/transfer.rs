//! What a monitor observes: one growing file, or the parts of a file
//! downloaded in parallel.

use crate::error::{Error, Result};
use crate::sample::SizeProbe;

use std::fmt;
use std::io;
use std::sync::Arc;

/// One observed unit: a size probe plus the size it should reach.
///
/// Clones share the probe.
#[derive(Clone)]
pub struct TransferTarget {
    probe: Arc<dyn SizeProbe>,
    expected: Option<u64>,
}

impl TransferTarget {
    /// Create a target. `expected` is `None` when the final size is unknown.
    pub fn new<P: SizeProbe + 'static>(probe: P, expected: Option<u64>) -> Self {
        Self {
            probe: Arc::new(probe),
            expected,
        }
    }

    /// Expected final size in bytes, if known.
    pub fn expected(&self) -> Option<u64> {
        self.expected
    }

    /// Probe the current size of the target.
    pub fn current_size(&self) -> io::Result<u64> {
        self.probe.current_size()
    }
}

impl fmt::Debug for TransferTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferTarget")
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// The shape of a transfer.
#[derive(Debug)]
pub enum Transfer {
    /// A single file written by one stream.
    SingleStream(TransferTarget),
    /// Parts of one file written concurrently, in part order.
    MultiPart(Vec<TransferTarget>),
}

impl Transfer {
    /// A single-stream transfer.
    pub fn single<P: SizeProbe + 'static>(probe: P, expected: Option<u64>) -> Self {
        Transfer::SingleStream(TransferTarget::new(probe, expected))
    }

    /// A multi-part transfer from parallel lists of probes and expected part sizes.
    ///
    /// ```rust
    /// use std::sync::atomic::AtomicU64;
    /// use dlwatch::session::Transfer;
    /// use dlwatch::Error;
    ///
    /// let transfer = Transfer::multi_part(vec![AtomicU64::new(0), AtomicU64::new(0)], vec![100, 300]);
    /// assert_eq!(transfer.unwrap().len(), 2);
    ///
    /// let mismatched = Transfer::multi_part(vec![AtomicU64::new(0)], vec![100, 300]);
    /// assert_eq!(mismatched.unwrap_err(), Error::TargetCountMismatch { probes: 1, sizes: 2 });
    /// ```
    pub fn multi_part<P: SizeProbe + 'static>(probes: Vec<P>, sizes: Vec<u64>) -> Result<Self> {
        if probes.len() != sizes.len() {
            return Err(Error::TargetCountMismatch {
                probes: probes.len(),
                sizes: sizes.len(),
            });
        }
        let targets = probes
            .into_iter()
            .zip(sizes)
            .map(|(probe, size)| TransferTarget::new(probe, Some(size)))
            .collect();
        let transfer = Transfer::MultiPart(targets);
        transfer.validate()?;
        Ok(transfer)
    }

    /// Reject transfers that cannot be monitored.
    pub fn validate(&self) -> Result<()> {
        match self {
            Transfer::MultiPart(targets) if targets.is_empty() => Err(Error::NoTargets),
            _ => Ok(()),
        }
    }

    /// The observed targets, in part order.
    pub fn targets(&self) -> &[TransferTarget] {
        match self {
            Transfer::SingleStream(target) => std::slice::from_ref(target),
            Transfer::MultiPart(targets) => targets,
        }
    }

    /// Number of observed targets.
    pub fn len(&self) -> usize {
        self.targets().len()
    }

    /// `true` for a multi-part transfer without parts.
    pub fn is_empty(&self) -> bool {
        self.targets().is_empty()
    }

    pub fn is_multi_part(&self) -> bool {
        matches!(self, Transfer::MultiPart(_))
    }
}
