//! Integration tests for the JSON export artifact.
//!
//! Tests cover:
//! - Snapshot captures history (newest first) and statistics
//! - JSON round-trips the snapshot exactly
//! - The export timestamp is RFC 3339
//! - Writing to disk and reading back

mod common;

use common::*;
use time::format_description::well_known::Rfc3339;

fn populated_session() -> anyhow::Result<CaptureSession> {
    let mut session = CaptureSession::new();
    session.start()?;
    for (plate, confidence) in [("34 ABC 123", 96.5), ("06 DF 2341", 81.25), ("16 AZ 905", 74.0)] {
        session.begin_scan()?;
        session.complete_scan(make_detection(plate, confidence), 18.0)?;
        session.clear_overlay();
    }
    session.stop();
    Ok(session)
}

#[test]
fn snapshot_captures_session() -> anyhow::Result<()> {
    let session = populated_session()?;
    let snapshot = ExportSnapshot::from_session(&session);

    assert_eq!(snapshot.detections.len(), 3);
    // Newest first, same order as the on-screen list
    assert_eq!(snapshot.detections[0].plate, "16 AZ 905");
    assert_eq!(snapshot.detections[2].plate, "34 ABC 123");
    assert_eq!(snapshot.stats, *session.stats());

    Ok(())
}

#[test]
fn json_round_trips_exactly() -> anyhow::Result<()> {
    let session = populated_session()?;
    let snapshot = ExportSnapshot::from_session(&session);

    let json = snapshot.to_json()?;
    let parsed = ExportSnapshot::from_json(&json)?;
    assert_eq!(parsed, snapshot);

    Ok(())
}

#[test]
fn export_timestamp_is_rfc3339() -> anyhow::Result<()> {
    let session = populated_session()?;
    let json = ExportSnapshot::from_session(&session).to_json()?;

    let value: serde_json::Value = serde_json::from_str(&json)?;
    let exported_at = value["exported_at"]
        .as_str()
        .expect("exported_at must be a string");
    assert!(time::OffsetDateTime::parse(exported_at, &Rfc3339).is_ok());

    // The other top-level fields are present
    assert!(value["detections"].is_array());
    assert!(value["stats"]["detections"].is_u64());

    Ok(())
}

#[test]
fn writes_and_reads_back_from_disk() -> anyhow::Result<()> {
    let session = populated_session()?;
    let snapshot = ExportSnapshot::from_session(&session);

    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("export.json");
    snapshot.write_to(&path)?;

    let parsed = ExportSnapshot::from_json(&std::fs::read_to_string(&path)?)?;
    assert_eq!(parsed, snapshot);

    Ok(())
}

#[test]
fn empty_session_exports_cleanly() -> anyhow::Result<()> {
    let session = CaptureSession::new();
    let snapshot = ExportSnapshot::from_session(&session);

    assert!(snapshot.detections.is_empty());
    assert_eq!(snapshot.stats, Statistics::default());

    let parsed = ExportSnapshot::from_json(&snapshot.to_json()?)?;
    assert_eq!(parsed, snapshot);

    Ok(())
}
