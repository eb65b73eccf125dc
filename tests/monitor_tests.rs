//! Tests for the monitor lifecycle, builder and reports.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use dlwatch::monitor::{MonitorBuilder, MonitorState, Status};
use dlwatch::session::{Transfer, TransferTarget};
use dlwatch::{Error, LogLevel};
use tokio::time::{sleep, Instant};

mod common;
use common::helpers::*;

// Builder
#[test]
fn test_builder_rejects_empty_transfer() {
    let result = MonitorBuilder::new(TEST_FILENAME, Transfer::MultiPart(vec![]))
        .hidden()
        .build();
    assert_eq!(result.unwrap_err(), Error::NoTargets);
}

#[test]
fn test_builder_rejects_zero_interval() {
    let result = MonitorBuilder::single(TEST_FILENAME, create_counter(0), Some(10))
        .hidden()
        .single_stream_interval(Duration::ZERO)
        .build();
    assert_eq!(result.unwrap_err(), Error::InvalidInterval);
}

#[test]
fn test_builder_settings() {
    let dir = create_temp_dir();
    let monitor = MonitorBuilder::single(TEST_FILENAME, create_counter(0), Some(10))
        .hidden()
        .directory(dir.path().to_path_buf())
        .single_stream_interval(Duration::from_millis(100))
        .multi_part_interval(Duration::from_millis(200))
        .build()
        .expect("Failed to build monitor");

    assert_eq!(monitor.state(), MonitorState::Idle);
    assert_eq!(monitor.name(), TEST_FILENAME);
    assert_eq!(monitor.destination(), dir.path().join(TEST_FILENAME));
    assert!(!monitor.config().style_options.is_enabled());
    assert_eq!(
        monitor.config().single_stream_interval,
        Duration::from_millis(100)
    );
    assert_eq!(
        monitor.config().multi_part_interval,
        Duration::from_millis(200)
    );
}

// Completion
#[tokio::test(start_paused = true)]
async fn test_single_stream_success() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let size = create_counter(0);
    let monitor = create_single_monitor(size.clone(), Some(1000), &log, dir.path());

    let handle = monitor.start();
    assert_eq!(handle.state(), MonitorState::Running);
    sleep(Duration::from_millis(600)).await;
    grow_to(&size, 400);
    sleep(Duration::from_millis(600)).await;
    grow_to(&size, 1000);
    let report = handle.stop().await.expect("Monitor task failed");

    assert!(report.is_success());
    assert_eq!(report.status(), &Status::Success);
    assert_eq!(report.observed(), 1000);
    assert_eq!(report.expected(), Some(1000));
    assert!(report.ticks() >= 4);
    assert_eq!(
        report.final_frame(),
        "[/]  file.bin  [=======100%=========](1000 bytes)  0.00 MB/s"
    );

    let message = assert_single_outcome(&log, LogLevel::Info);
    assert_eq!(
        message,
        format!(
            "Downloaded file.bin of size 1000 bytes at {} successfully !",
            dir.path().join(TEST_FILENAME).display()
        )
    );
    assert_eq!(message, report.message());
}

#[tokio::test(start_paused = true)]
async fn test_single_stream_failure() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let size = create_counter(0);
    let monitor = create_single_monitor(size.clone(), Some(1000), &log, dir.path());

    let handle = monitor.start();
    grow_to(&size, 900);
    sleep(Duration::from_millis(800)).await;
    let report = handle.stop().await.expect("Monitor task failed");

    assert!(!report.is_success());
    assert_eq!(
        report.status(),
        &Status::Fail("file.bin: 900 of 1000 bytes".to_string())
    );
    let message = assert_single_outcome(&log, LogLevel::Error);
    assert_eq!(message, "Download failed! file.bin: 900 of 1000 bytes");
}

#[tokio::test(start_paused = true)]
async fn test_unknown_size_succeeds_when_probe_works() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let size = create_counter(0);
    let monitor = create_single_monitor(size.clone(), None, &log, dir.path());

    let handle = monitor.start();
    grow_to(&size, 4321);
    sleep(Duration::from_millis(300)).await;
    let report = handle.stop().await.expect("Monitor task failed");

    assert!(report.is_success());
    assert!(report.final_frame().contains("(unknown size)"));
    assert_single_outcome(&log, LogLevel::Info);
}

#[tokio::test(start_paused = true)]
async fn test_multi_part_success() {
    let log = RecordingLog::new();
    let parts = vec![create_counter(0), create_counter(0)];
    let monitor = create_multi_monitor(parts.clone(), vec![100, 300], &log);

    let handle = monitor.start();
    sleep(Duration::from_millis(700)).await;
    grow_to(&parts[0], 100);
    grow_to(&parts[1], 300);
    let report = handle.stop().await.expect("Monitor task failed");

    assert!(report.is_success());
    assert_eq!(report.parts(), &[100, 300]);
    assert_eq!(report.observed(), 400);
    assert_single_outcome(&log, LogLevel::Info);
}

#[tokio::test(start_paused = true)]
async fn test_multi_part_failure_lists_short_parts() {
    let log = RecordingLog::new();
    let parts = vec![create_counter(100), create_counter(150)];
    let monitor = create_multi_monitor(parts, vec![100, 300], &log);

    let report = monitor
        .start()
        .stop()
        .await
        .expect("Monitor task failed");

    assert_eq!(
        report.status(),
        &Status::Fail("part 2: 150 of 300 bytes".to_string())
    );
    assert_single_outcome(&log, LogLevel::Error);
}

// Lifecycle
#[tokio::test(start_paused = true)]
async fn test_stop_is_observed_within_one_interval() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let size = create_counter(0);
    let monitor = create_single_monitor(size.clone(), Some(10), &log, dir.path());

    let handle = monitor.start();
    sleep(Duration::from_millis(1000)).await;
    let ticks_before = handle.ticks();
    assert!(ticks_before >= 3);

    let stopped_at = Instant::now();
    let report = handle.stop().await.expect("Monitor task failed");

    assert!(stopped_at.elapsed() <= SINGLE_INTERVAL);
    assert!(report.ticks() <= ticks_before + 1);
    // exactly one report follows the stop
    assert_eq!(log.entries().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_multi_part_uses_multi_part_interval() {
    let log = RecordingLog::new();
    let monitor = create_multi_monitor(vec![create_counter(0)], vec![10], &log);

    let handle = monitor.start();
    sleep(Duration::from_millis(1000)).await;
    let report = handle.stop().await.expect("Monitor task failed");

    // 300ms ticks: 3 fit in the 1000ms slept, then the running one finishes.
    assert!(report.ticks() >= 3 && report.ticks() <= 4, "{} ticks", report.ticks());
}

#[tokio::test(start_paused = true)]
async fn test_signal_stop_transitions() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let monitor = create_single_monitor(create_counter(0), Some(10), &log, dir.path());

    let handle = monitor.start();
    assert!(handle.is_running());
    assert!(handle.signal_stop());
    assert_eq!(handle.state(), MonitorState::Stopping);
    assert!(!handle.signal_stop());

    let report = handle.stop().await.expect("Monitor task failed");
    assert_eq!(report.ticks(), 0);
    assert_eq!(log.entries().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_monitor() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let monitor = create_single_monitor(create_counter(10), Some(10), &log, dir.path());

    let handle = monitor.start();
    sleep(Duration::from_millis(300)).await;
    drop(handle);
    sleep(Duration::from_millis(300)).await;

    assert_single_outcome(&log, LogLevel::Info);
}

#[tokio::test(start_paused = true)]
async fn test_watch_reports_after_transfer() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let size = create_counter(0);
    let monitor = create_single_monitor(size.clone(), Some(2048), &log, dir.path());

    let writer = size.clone();
    let (written, report) = monitor
        .watch(async move {
            for chunk in 1..=4u64 {
                sleep(Duration::from_millis(200)).await;
                grow_to(&writer, chunk * 512);
            }
            writer.load(Ordering::Acquire)
        })
        .await
        .expect("Monitor task failed");

    assert_eq!(written, 2048);
    assert!(report.is_success());
    assert!(report.ticks() >= 2);
}

// Sampling failures
#[tokio::test(start_paused = true)]
async fn test_transient_probe_failures_are_survived() {
    let dir = create_temp_dir();
    let log = RecordingLog::new();
    let size = create_counter(0);
    let probe = Arc::new(FlakyProbe::new(size.clone(), 2..5));
    let monitor = MonitorBuilder::new(
        TEST_FILENAME,
        Transfer::SingleStream(TransferTarget::new(probe.clone(), Some(1000))),
    )
    .hidden()
    .directory(dir.path().to_path_buf())
    .shared_logger(log.clone())
    .build()
    .expect("Failed to build monitor");

    let handle = monitor.start();
    grow_to(&size, 500);
    sleep(Duration::from_millis(2000)).await;
    assert!(handle.is_running());
    grow_to(&size, 1000);
    let report = handle.stop().await.expect("Monitor task failed");

    assert_eq!(report.sample_failures(), 3);
    assert!(probe.calls() > 5);
    assert_eq!(report.observed(), 1000);
    assert!(report.is_success());
    assert_single_outcome(&log, LogLevel::Info);
}
