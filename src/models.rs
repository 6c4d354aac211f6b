use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Rectangle in frame coordinates where a plate was "found"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlateRegion {
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        let w = self.width as f32;
        let h = self.height as f32;
        if h == 0.0 {
            return 0.0;
        }
        w / h
    }

    /// Get center coordinates
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn fits_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x + self.width <= frame_width
            && self.y + self.height <= frame_height
    }

    /// Shift and shrink the region as needed so it lies inside the frame
    pub fn clamped_to(mut self, frame_width: u32, frame_height: u32) -> Self {
        self.width = self.width.min(frame_width);
        self.height = self.height.min(frame_height);
        if self.x + self.width > frame_width {
            self.x = frame_width - self.width;
        }
        if self.y + self.height > frame_height {
            self.y = frame_height - self.height;
        }
        self
    }
}

/// A single simulated plate-recognition event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub id: Uuid,
    pub plate: String,
    /// Percentage in [0, 100]
    pub confidence: f32,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub region: PlateRegion,
}

impl Detection {
    pub fn new(plate: impl Into<String>, confidence: f32, region: PlateRegion) -> Self {
        Self {
            id: Uuid::new_v4(),
            plate: plate.into(),
            confidence: clamp_confidence(confidence),
            timestamp: OffsetDateTime::now_utc(),
            region,
        }
    }
}

/// Rolling display figures, updated once per recorded detection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub detections: u64,
    pub avg_confidence: f32,
    pub last_latency_ms: f32,
    pub fps: f32,
}

impl Statistics {
    pub fn record(&mut self, confidence: f32, latency_ms: f32) {
        let confidence = clamp_confidence(confidence);
        self.detections += 1;
        self.avg_confidence += (confidence - self.avg_confidence) / self.detections as f32;
        self.last_latency_ms = latency_ms;
        self.fps = if latency_ms > 0.0 {
            1000.0 / latency_ms
        } else {
            0.0
        };
    }
}

pub fn clamp_confidence(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}
