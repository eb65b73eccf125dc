#![allow(dead_code)]

use dlwatch::progress::StyleOptions;
use dlwatch::sample::SizeProbe;
use dlwatch::session::{Session, Transfer};
use dlwatch::{LogLevel, Monitor, MonitorBuilder, OutcomeLog};
use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

// Common test constants
pub const TEST_FILENAME: &str = "file.bin";
pub const SINGLE_INTERVAL: Duration = Duration::from_millis(250);
pub const MULTI_INTERVAL: Duration = Duration::from_millis(300);

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates an in-memory byte counter standing in for a growing file
pub fn create_counter(initial: u64) -> Arc<AtomicU64> {
    Arc::new(AtomicU64::new(initial))
}

/// Simulates the writer growing a file to `size` bytes
pub fn grow_to(counter: &AtomicU64, size: u64) {
    counter.store(size, Ordering::Release);
}

// === Log Collaborator ===

/// Outcome log remembering every entry
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl OutcomeLog for RecordingLog {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

// === Probes ===

/// Probe reading a counter and failing on the given call numbers (0-based)
pub struct FlakyProbe {
    size: Arc<AtomicU64>,
    calls: AtomicUsize,
    failing: Range<usize>,
}

impl FlakyProbe {
    pub fn new(size: Arc<AtomicU64>, failing: Range<usize>) -> Self {
        Self {
            size,
            calls: AtomicUsize::new(0),
            failing,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SizeProbe for FlakyProbe {
    fn current_size(&self) -> io::Result<u64> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&call) {
            return Err(io::Error::new(io::ErrorKind::WouldBlock, "not flushed yet"));
        }
        Ok(self.size.load(Ordering::Acquire))
    }
}

// === Builders ===

/// Creates a hidden single-stream monitor logging into `log`
pub fn create_single_monitor(
    counter: Arc<AtomicU64>,
    expected: Option<u64>,
    log: &Arc<RecordingLog>,
    directory: &Path,
) -> Monitor {
    MonitorBuilder::single(TEST_FILENAME, counter, expected)
        .hidden()
        .directory(directory.to_path_buf())
        .shared_logger(log.clone())
        .build()
        .expect("Failed to build monitor")
}

/// Creates a hidden multi-part monitor logging into `log`
pub fn create_multi_monitor(
    counters: Vec<Arc<AtomicU64>>,
    sizes: Vec<u64>,
    log: &Arc<RecordingLog>,
) -> Monitor {
    let transfer = Transfer::multi_part(counters, sizes).expect("Failed to create transfer");
    MonitorBuilder::new(TEST_FILENAME, transfer)
        .hidden()
        .shared_logger(log.clone())
        .build()
        .expect("Failed to build monitor")
}

/// Creates a session over a multi-part transfer with the default style
pub fn create_multi_session(sizes: Vec<u64>) -> Session {
    let counters: Vec<Arc<AtomicU64>> = sizes.iter().map(|_| create_counter(0)).collect();
    let transfer = Transfer::multi_part(counters, sizes).expect("Failed to create transfer");
    Session::new(TEST_FILENAME, &transfer, &StyleOptions::default())
}

/// Creates a session over a single stream with the default style
pub fn create_single_session(expected: Option<u64>) -> Session {
    let transfer = Transfer::single(create_counter(0), expected);
    Session::new(TEST_FILENAME, &transfer, &StyleOptions::default())
}

// === Assertions ===

/// Asserts that a bar has exactly `width` characters
pub fn assert_bar_width(bar: &str, width: usize) {
    assert_eq!(
        bar.chars().count(),
        width,
        "Bar width mismatch for bar: {:?}",
        bar
    );
}

/// Asserts that exactly one outcome was logged, with the given level
pub fn assert_single_outcome(log: &RecordingLog, level: LogLevel) -> String {
    let entries = log.entries();
    assert_eq!(entries.len(), 1, "Expected one outcome, got {:?}", entries);
    assert_eq!(entries[0].0, level);
    entries[0].1.clone()
}
