//! Single-frame capture from a V4L2 device.
//!
//! Opened per grab; at the demo's scan cadence that is cheap enough and
//! leaves no handle to leak when capture stops.

use anyhow::{Context, Result};
use image::DynamicImage;
use v4l::FourCC;
use v4l::buffer::Type;
use v4l::io::traits::CaptureStream;
use v4l::prelude::*;
use v4l::video::Capture;

/// Grab one frame from `/dev/video{device_index}` and decode it.
///
/// Any failure here (missing device, permission, decode) is the
/// camera-access error the UI surfaces inline.
pub fn grab_frame(device_index: usize) -> Result<DynamicImage> {
    let dev = Device::new(device_index)
        .with_context(|| format!("Camera /dev/video{device_index} is unavailable"))?;

    let mut fmt = dev.format().context("Failed to query camera format")?;
    fmt.fourcc = FourCC::new(b"MJPG");
    dev.set_format(&fmt).context("Camera rejected MJPEG format")?;

    let mut stream = v4l::io::mmap::Stream::new(&dev, Type::VideoCapture)
        .context("Failed to start camera stream")?;

    // The first buffer from cheap webcams is often stale or half-exposed
    let _ = stream.next();
    let (data, _meta) = stream.next().context("Failed to read camera frame")?;

    image::load_from_memory(data).context("Failed to decode camera frame")
}
