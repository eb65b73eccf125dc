//! Mutable per-part and per-transfer state, owned by the sampling task.

use super::aggregate::{aggregate, fraction, Totals};
use super::transfer::Transfer;
use crate::progress::{bar_width, percent_of, StyleOptions};
use crate::sample::{PartSample, Reading, TickSample};

/// What is known about one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartState {
    observed: u64,
    rate: u64,
    expected: Option<u64>,
    bar_width: usize,
    reachable: bool,
}

impl PartState {
    /// A part nothing was observed of yet.
    pub fn new(expected: Option<u64>, bar_width: usize) -> Self {
        Self {
            observed: 0,
            rate: 0,
            expected,
            bar_width,
            reachable: false,
        }
    }

    /// Largest size observed so far.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Rate of the last tick, in bytes per second.
    pub fn rate(&self) -> u64 {
        self.rate
    }

    pub fn expected(&self) -> Option<u64> {
        self.expected
    }

    /// Columns of this part's bar, fixed when the session is created.
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Whether the last probe of this part succeeded.
    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    /// Fraction complete, `None` when the expected size is unknown or zero.
    pub fn fraction(&self) -> Option<f64> {
        fraction(self.observed, self.expected)
    }

    /// Whole percent complete, rounded down in integer arithmetic.
    pub fn percent(&self) -> Option<u32> {
        percent_of(self.observed, self.expected)
    }

    /// Whether the part holds exactly its expected size. With an unknown
    /// expected size, a part is complete as long as it can still be probed.
    pub fn is_complete(&self) -> bool {
        match self.expected {
            Some(expected) => self.observed == expected,
            None => self.reachable,
        }
    }

    /// Apply one tick. Observed bytes never decrease; a failed probe keeps the
    /// previous size and reports no growth.
    pub fn record(&mut self, sample: &PartSample) {
        match sample.size {
            Some(size) => {
                self.observed = self.observed.max(size);
                self.rate = sample.rate;
                self.reachable = true;
            }
            None => {
                self.rate = 0;
                self.reachable = false;
            }
        }
    }

    /// Apply a single reading without touching the rate.
    pub fn refresh(&mut self, size: Option<u64>) {
        match size {
            Some(size) => {
                self.observed = self.observed.max(size);
                self.reachable = true;
            }
            None => self.reachable = false,
        }
    }
}

/// Aggregate state of a whole transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    name: String,
    parts: Vec<PartState>,
    multi_part: bool,
}

impl Session {
    /// Create the session of `transfer`, allocating each part's bar width once.
    ///
    /// A single stream uses the style's single bar width. Parts of a multi-part
    /// transfer share the style's column budget equally, clamped to its
    /// minimum bar width.
    pub fn new(name: impl Into<String>, transfer: &Transfer, style: &StyleOptions) -> Self {
        let multi_part = transfer.is_multi_part();
        let width = if multi_part {
            bar_width(style.bar_budget(), transfer.len(), style.min_bar_width())
        } else {
            style.single_bar_width().max(style.min_bar_width())
        };
        let parts = transfer
            .targets()
            .iter()
            .map(|target| PartState::new(target.expected(), width))
            .collect();

        Self {
            name: name.into(),
            parts,
            multi_part,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parts(&self) -> &[PartState] {
        &self.parts
    }

    pub fn is_multi_part(&self) -> bool {
        self.multi_part
    }

    /// Overall figures, recomputed from the parts.
    pub fn totals(&self) -> Totals {
        aggregate(&self.parts)
    }

    /// Whether every part holds exactly its expected size.
    pub fn is_complete(&self) -> bool {
        self.parts.iter().all(PartState::is_complete)
    }

    /// Apply one tick to every part.
    pub fn apply(&mut self, sample: TickSample) {
        for (part, sample) in self.parts.iter_mut().zip(&sample.parts) {
            part.record(sample);
        }
    }

    /// Apply a single reading to every part, keeping the last rates.
    pub fn refresh(&mut self, reading: &Reading) {
        for (part, size) in self.parts.iter_mut().zip(reading.sizes()) {
            part.refresh(*size);
        }
    }
}
