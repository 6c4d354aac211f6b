use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{Detection, Statistics};
use crate::session::CaptureSession;

/// The one output artifact: detection history plus a statistics snapshot,
/// stamped with an RFC 3339 export timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    #[serde(with = "time::serde::rfc3339")]
    pub exported_at: OffsetDateTime,
    /// Most recent detection first, same order as the on-screen list
    pub detections: Vec<Detection>,
    pub stats: Statistics,
}

impl ExportSnapshot {
    pub fn from_session(session: &CaptureSession) -> Self {
        Self {
            exported_at: OffsetDateTime::now_utc(),
            detections: session.history().cloned().collect(),
            stats: *session.stats(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize export snapshot")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse export snapshot")
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        Ok(())
    }
}
