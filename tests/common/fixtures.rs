use image::{GrayImage, Luma};
use platewatch::{Detection, PlateRegion};

/// Plate-shaped region at the given origin
pub fn make_region(x: u32, y: u32) -> PlateRegion {
    PlateRegion {
        x,
        y,
        width: 160,
        height: 40,
    }
}

/// Detection with a fixed region, fresh id and timestamp
pub fn make_detection(plate: &str, confidence: f32) -> Detection {
    Detection::new(plate, confidence, make_region(40, 60))
}

/// 192x96 flat dark frame with one bright striped block at (48, 0).
/// The stripes have period 8 so the block clears both the brightness and
/// the gradient thresholds of the default pipeline.
pub fn make_striped_frame() -> GrayImage {
    GrayImage::from_fn(192, 96, |x, y| {
        if (48..96).contains(&x) && y < 48 {
            if (x / 4) % 2 == 0 {
                Luma([230u8])
            } else {
                Luma([30u8])
            }
        } else {
            Luma([20u8])
        }
    })
}
