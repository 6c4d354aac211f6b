use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use image::{DynamicImage, ImageReader};

use crate::scanner::ScanPipeline;
use crate::session::CaptureSession;

/// Synthetic feed dimensions when no camera or image provides pixels
pub const DEMO_FEED_WIDTH: u32 = 640;
pub const DEMO_FEED_HEIGHT: u32 = 480;

/// A decoded frame plus its display handle
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: Arc<DynamicImage>,
    pub handle: iced::widget::image::Handle,
}

impl Frame {
    pub fn new(image: DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let handle = iced::widget::image::Handle::from_rgba(width, height, rgba.into_raw());
        Self {
            image: Arc::new(image),
            handle,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let img = ImageReader::open(path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
        Ok(Self::new(img))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Where frames come from while capturing
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// V4L2 device index, grabbed once per scan
    Camera(usize),
    /// Uploaded still image, rescanned on every tick
    Still(Frame),
    /// No pixels at all: detections are fabricated on the timer
    Demo,
}

#[derive(Debug)]
pub struct AppState {
    pub session: CaptureSession,
    pub scanner: ScanPipeline,
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: CaptureSession::new(),
            scanner: ScanPipeline::new(),
            dark_mode: true,
        }
    }
}
