use std::collections::VecDeque;

use anyhow::{Result, bail};

use crate::models::{Detection, Statistics};

/// History keeps this many of the most recent detections
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Capturing,
    Processing,
    Displaying,
}

/// Capture-session lifecycle plus the page-lifetime detection history.
///
/// Phase transitions: Idle → Capturing → Processing → Displaying →
/// Capturing, with stop() allowed from anywhere. History and statistics
/// outlive individual sessions; only the app tearing down discards them.
#[derive(Debug)]
pub struct CaptureSession {
    phase: SessionPhase,
    history: VecDeque<Detection>,
    stats: Statistics,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            stats: Statistics::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != SessionPhase::Idle
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Most recent detection first
    pub fn history(&self) -> impl Iterator<Item = &Detection> {
        self.history.iter().rev()
    }

    pub fn latest(&self) -> Option<&Detection> {
        self.history.back()
    }

    /// Whether the latest detection's overlay is currently on screen
    pub fn overlay_visible(&self) -> bool {
        self.phase == SessionPhase::Displaying
    }

    pub fn start(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Idle {
            bail!("capture already running");
        }
        self.phase = SessionPhase::Capturing;
        Ok(())
    }

    pub fn begin_scan(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Capturing {
            bail!("not capturing");
        }
        self.phase = SessionPhase::Processing;
        Ok(())
    }

    /// Record a finished scan: history gains the detection (oldest evicted
    /// past the limit) and the rolling statistics fold it in.
    pub fn complete_scan(&mut self, detection: Detection, latency_ms: f32) -> Result<()> {
        if self.phase != SessionPhase::Processing {
            bail!("no scan in progress");
        }
        self.stats.record(detection.confidence, latency_ms);
        self.history.push_back(detection);
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.phase = SessionPhase::Displaying;
        Ok(())
    }

    /// Overlay timer fired. No-op unless a detection is on screen, so a
    /// stale timer tick after stop() is harmless.
    pub fn clear_overlay(&mut self) {
        if self.phase == SessionPhase::Displaying {
            self.phase = SessionPhase::Capturing;
        }
    }

    /// Allowed from any state. The caller is responsible for releasing the
    /// camera handle; history and statistics are kept.
    pub fn stop(&mut self) {
        self.phase = SessionPhase::Idle;
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}
