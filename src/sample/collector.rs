//! Periodic size measurements and instantaneous transfer rates.
//!
//! One tick reads every target, sleeps for the sampling interval, reads every
//! target again and derives a per-part rate from the two [`Reading`]s. Readings
//! and the resulting [`TickSample`] are immutable values handed to the session;
//! nothing is reused between ticks.
//!
//! A probe that fails is swallowed: the part counts as "no change" for that tick
//! and the failure is counted and logged at `debug` level.
//!
//! Probes are synchronous. The sampling loop runs them on tokio's blocking pool,
//! so a slow metadata read never stalls writer tasks sharing the runtime thread.

use crate::session::TransferTarget;

use std::io;
use std::time::Duration;
use tracing::debug;

/// Sizes of every target at one instant. `None` marks a failed probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    sizes: Vec<Option<u64>>,
}

impl Reading {
    pub fn new(sizes: Vec<Option<u64>>) -> Self {
        Self { sizes }
    }

    pub fn sizes(&self) -> &[Option<u64>] {
        &self.sizes
    }

    /// `true` if every probe of this reading succeeded.
    pub fn is_complete(&self) -> bool {
        self.sizes.iter().all(Option::is_some)
    }
}

/// Outcome of one tick for one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSample {
    /// Size at the end of the tick, `None` if either probe failed.
    pub size: Option<u64>,
    /// Bytes per second over the tick.
    pub rate: u64,
}

/// Outcome of one tick for every part, in part order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSample {
    pub parts: Vec<PartSample>,
}

/// Bytes per second for a growth from `before` to `after` over `interval`.
///
/// Computed as `(after - before) * 1000 / interval_ms`. A shrinking size is
/// treated as no growth.
///
/// ```rust
/// use std::time::Duration;
/// use dlwatch::sample::rate_per_sec;
///
/// assert_eq!(rate_per_sec(1_000, 1_250, Duration::from_millis(250)), 1_000);
/// assert_eq!(rate_per_sec(0, 300, Duration::from_millis(300)), 1_000);
/// assert_eq!(rate_per_sec(500, 400, Duration::from_millis(250)), 0);
/// ```
pub fn rate_per_sec(before: u64, after: u64, interval: Duration) -> u64 {
    let millis = interval.as_millis().max(1);
    let grown = u128::from(after.saturating_sub(before));
    u64::try_from(grown * 1000 / millis).unwrap_or(u64::MAX)
}

/// Measures targets and derives their transfer rates.
#[derive(Debug)]
pub struct SampleCollector {
    interval: Duration,
    failures: u64,
}

impl SampleCollector {
    /// Create a collector sleeping `interval` between the two readings of a tick.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            failures: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of probes that failed so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Probe every target once on the calling thread.
    pub fn read(&mut self, targets: &[TransferTarget]) -> Reading {
        let results = probe_all(targets);
        self.collect(results)
    }

    /// Probe every target once on the blocking pool.
    ///
    /// If the blocking task cannot be joined, every part of this reading counts
    /// as a failed probe.
    pub async fn read_in_background(&mut self, targets: &[TransferTarget]) -> Reading {
        let owned = targets.to_vec();
        let results = match tokio::task::spawn_blocking(move || probe_all(&owned)).await {
            Ok(results) => results,
            Err(e) => {
                debug!(error = %e, "size reading task failed");
                targets
                    .iter()
                    .map(|_| Err(io::Error::other(e.to_string())))
                    .collect()
            }
        };
        self.collect(results)
    }

    fn collect(&mut self, results: Vec<io::Result<u64>>) -> Reading {
        let sizes = results
            .into_iter()
            .enumerate()
            .map(|(part, result)| match result {
                Ok(size) => Some(size),
                Err(e) => {
                    self.failures += 1;
                    debug!(part, error = %e, "size probe failed, treating as no change");
                    None
                }
            })
            .collect();
        Reading::new(sizes)
    }

    /// Derive a tick sample from a reading and the one taken one interval later.
    pub fn compare(&self, first: &Reading, second: &Reading) -> TickSample {
        let parts = first
            .sizes()
            .iter()
            .zip(second.sizes())
            .map(|(before, after)| match (before, after) {
                (Some(before), Some(after)) => PartSample {
                    size: Some(*after),
                    rate: rate_per_sec(*before, *after, self.interval),
                },
                _ => PartSample {
                    size: None,
                    rate: 0,
                },
            })
            .collect();
        TickSample { parts }
    }

    /// Run one full measurement: read, sleep one interval, read again.
    pub async fn sample(&mut self, targets: &[TransferTarget]) -> TickSample {
        let first = self.read_in_background(targets).await;
        tokio::time::sleep(self.interval).await;
        let second = self.read_in_background(targets).await;
        self.compare(&first, &second)
    }
}

fn probe_all(targets: &[TransferTarget]) -> Vec<io::Result<u64>> {
    targets.iter().map(TransferTarget::current_size).collect()
}
