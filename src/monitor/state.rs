//! Lifecycle states shared between a monitor's task and its handle.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

/// Lifecycle of a monitor: `Idle -> Running -> Stopping -> Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MonitorState {
    /// Constructed, not started.
    Idle = 0,
    /// The sampling loop is active.
    Running = 1,
    /// Stop was requested; the current tick is finishing.
    Stopping = 2,
    /// The loop exited and the report was produced.
    Terminated = 3,
}

impl MonitorState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => MonitorState::Idle,
            1 => MonitorState::Running,
            2 => MonitorState::Stopping,
            _ => MonitorState::Terminated,
        }
    }
}

/// State written by the caller (stop) and by the sampling task (ticks, end).
#[derive(Debug)]
pub(crate) struct SharedState {
    state: AtomicU8,
    ticks: AtomicU64,
}

impl SharedState {
    pub(crate) fn new() -> Self {
        Self {
            state: AtomicU8::new(MonitorState::Idle as u8),
            ticks: AtomicU64::new(0),
        }
    }

    pub(crate) fn load(&self) -> MonitorState {
        MonitorState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn store(&self, state: MonitorState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub(crate) fn is_running(&self) -> bool {
        self.load() == MonitorState::Running
    }

    /// Move from `Running` to `Stopping`. Returns `false` if the monitor was
    /// not running.
    pub(crate) fn begin_stop(&self) -> bool {
        self.state
            .compare_exchange(
                MonitorState::Running as u8,
                MonitorState::Stopping as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub(crate) fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}
