//! Combining per-part state into overall totals.

use super::state::PartState;

/// Overall figures of a transfer at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Bytes observed across all parts.
    pub observed: u64,
    /// Sum of the expected part sizes, `None` if any of them is unknown.
    pub expected: Option<u64>,
    /// Sum of the per-part rates in bytes per second.
    pub rate: u64,
}

impl Totals {
    /// Overall fraction complete, `None` when the expected size is unknown or zero.
    pub fn fraction(&self) -> Option<f64> {
        fraction(self.observed, self.expected)
    }
}

/// Fraction of `expected` reached by `observed`, clamped to `[0, 1]`.
///
/// ```rust
/// use dlwatch::session::fraction;
///
/// assert_eq!(fraction(50, Some(100)), Some(0.5));
/// assert_eq!(fraction(150, Some(100)), Some(1.0));
/// assert_eq!(fraction(50, Some(0)), None);
/// assert_eq!(fraction(50, None), None);
/// ```
pub fn fraction(observed: u64, expected: Option<u64>) -> Option<f64> {
    match expected {
        Some(expected) if expected > 0 => {
            Some((observed as f64 / expected as f64).clamp(0.0, 1.0))
        }
        _ => None,
    }
}

/// Sum observed bytes, expected sizes and rates over every part.
///
/// Recomputed from the parts on every call; nothing is cached.
pub fn aggregate(parts: &[PartState]) -> Totals {
    Totals {
        observed: parts
            .iter()
            .fold(0u64, |sum, part| sum.saturating_add(part.observed())),
        expected: parts.iter().map(PartState::expected).sum(),
        rate: parts
            .iter()
            .fold(0u64, |sum, part| sum.saturating_add(part.rate())),
    }
}
