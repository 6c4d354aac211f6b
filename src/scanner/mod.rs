pub mod heuristic;
pub mod plates;

use image::DynamicImage;
use rand::Rng;

use crate::models::{Detection, PlateRegion};

/// Main scan orchestrator.
///
/// The heuristic only decides where the overlay box lands; plate text and
/// confidence are always drawn from the random generators, whatever the
/// pixels said.
#[derive(Debug, Clone)]
pub struct ScanPipeline {
    // Heuristic parameters
    pub block_size: u32,
    pub blur_sigma: f32,
    pub min_brightness: f32,
    pub min_edge_score: f32,
    pub verbose: bool,
}

impl ScanPipeline {
    pub fn new() -> Self {
        Self {
            block_size: 48,
            blur_sigma: 1.5,
            min_brightness: 110.0,
            min_edge_score: 12.0,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the toy heuristic over a frame and fabricate a detection for it
    pub fn scan_frame(&self, img: &DynamicImage, rng: &mut impl Rng) -> Detection {
        if self.verbose {
            println!("\nPreprocessing frame ({}x{})...", img.width(), img.height());
        }
        let gray = heuristic::preprocess(img, self.blur_sigma);

        if self.verbose {
            println!("Sampling {}px blocks...", self.block_size);
        }
        let blocks = heuristic::sample_blocks(&gray, self.block_size);

        let candidates =
            heuristic::filter_candidates(&blocks, self.min_brightness, self.min_edge_score);

        if self.verbose {
            println!("Found {} candidate blocks (from {} sampled)", candidates.len(), blocks.len());
            for (i, block) in candidates.iter().take(5).enumerate() {
                println!(
                    "  Block {}: at ({}, {}) brightness={:.1} edge={:.2}",
                    i + 1,
                    block.x,
                    block.y,
                    block.brightness,
                    block.edge_score
                );
            }
        }

        let region = match heuristic::best_candidate(&candidates) {
            Some(block) => self.region_around(&block, img.width(), img.height()),
            // Nothing cleared the thresholds: place the box somewhere plausible
            None => random_region(img.width(), img.height(), rng),
        };

        let detection = Detection::new(
            plates::random_plate(rng),
            plates::random_confidence(rng),
            region,
        );

        if self.verbose {
            println!(
                "Detected: '{}' at ({}, {}) - confidence: {:.1}",
                detection.plate, detection.region.x, detection.region.y, detection.confidence
            );
        }

        detection
    }

    /// The simpler variant: no pixels consulted, everything fabricated
    pub fn fabricate(&self, frame_width: u32, frame_height: u32, rng: &mut impl Rng) -> Detection {
        Detection::new(
            plates::sample_plate(rng),
            plates::random_confidence(rng),
            random_region(frame_width, frame_height, rng),
        )
    }

    /// Expand a winning block into a plate-shaped region around its center
    fn region_around(&self, block: &heuristic::Block, frame_width: u32, frame_height: u32) -> PlateRegion {
        let width = (block.size * 3).clamp(1, frame_width);
        let height = (width / 4).clamp(1, frame_height);
        let (center_x, center_y) = block.center();
        PlateRegion {
            x: center_x.saturating_sub(width / 2),
            y: center_y.saturating_sub(height / 2),
            width,
            height,
        }
        .clamped_to(frame_width, frame_height)
    }
}

impl Default for ScanPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Plate-shaped rectangle placed somewhere inside the frame
fn random_region(frame_width: u32, frame_height: u32, rng: &mut impl Rng) -> PlateRegion {
    let min_width = (frame_width / 5).max(1);
    let max_width = (frame_width / 3).max(min_width);
    let width = rng.random_range(min_width..=max_width).min(frame_width);
    let height = (width / 4).clamp(1, frame_height);
    PlateRegion {
        x: rng.random_range(0..=frame_width - width),
        y: rng.random_range(0..=frame_height - height),
        width,
        height,
    }
}
