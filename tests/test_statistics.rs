//! Integration tests for the rolling statistics aggregate.
//!
//! Tests cover:
//! - Running-mean confidence over several detections
//! - Latency and derived frame-rate figures
//! - Confidence clamping to [0, 100] at every entry point

mod common;

use common::*;
use platewatch::models::clamp_confidence;

#[test]
fn running_mean_confidence() {
    let mut stats = Statistics::default();

    stats.record(80.0, 10.0);
    assert_eq!(stats.detections, 1);
    assert_eq!(stats.avg_confidence, 80.0);

    stats.record(90.0, 20.0);
    assert_eq!(stats.detections, 2);
    assert_eq!(stats.avg_confidence, 85.0);

    stats.record(70.0, 5.0);
    assert_eq!(stats.detections, 3);
    assert_eq!(stats.avg_confidence, 80.0);
}

#[test]
fn latency_and_frame_rate() {
    let mut stats = Statistics::default();

    stats.record(90.0, 20.0);
    assert_eq!(stats.last_latency_ms, 20.0);
    assert_eq!(stats.fps, 50.0);

    stats.record(90.0, 8.0);
    assert_eq!(stats.last_latency_ms, 8.0);
    assert_eq!(stats.fps, 125.0);

    // Zero latency cannot divide
    stats.record(90.0, 0.0);
    assert_eq!(stats.fps, 0.0);
}

#[test]
fn confidence_is_clamped() {
    assert_eq!(clamp_confidence(-5.0), 0.0);
    assert_eq!(clamp_confidence(150.0), 100.0);
    assert_eq!(clamp_confidence(42.5), 42.5);

    // Through the statistics aggregate
    let mut stats = Statistics::default();
    stats.record(150.0, 1.0);
    assert_eq!(stats.avg_confidence, 100.0);

    // Through the detection constructor
    let detection = make_detection("34 ABC 123", 150.0);
    assert_eq!(detection.confidence, 100.0);
    let detection = make_detection("34 ABC 123", -3.0);
    assert_eq!(detection.confidence, 0.0);
}

#[test]
fn session_folds_statistics_per_scan() -> anyhow::Result<()> {
    let mut session = CaptureSession::new();
    session.start()?;

    for (confidence, latency) in [(75.0, 10.0), (85.0, 40.0)] {
        session.begin_scan()?;
        session.complete_scan(make_detection("42 EH 1453", confidence), latency)?;
        session.clear_overlay();
    }

    let stats = session.stats();
    assert_eq!(stats.detections, 2);
    assert_eq!(stats.avg_confidence, 80.0);
    assert_eq!(stats.last_latency_ms, 40.0);
    assert_eq!(stats.fps, 25.0);

    Ok(())
}
