use image::{DynamicImage, GrayImage};
use imageproc::filter::gaussian_blur_f32;

/// A sampled pixel block with its toy scores
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    /// Mean luma over the block, 0-255
    pub brightness: f32,
    /// Mean absolute horizontal gradient over the block
    pub edge_score: f32,
}

impl Block {
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.size / 2, self.y + self.size / 2)
    }

    /// Combined plate-likeness score. Bright blocks with dense vertical
    /// strokes win; the weighting was eyeballed, not trained.
    pub fn score(&self) -> f32 {
        self.brightness / 255.0 + self.edge_score / 64.0
    }
}

/// Convert to grayscale and apply a light blur to reduce noise
pub fn preprocess(img: &DynamicImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(&img.to_luma8(), sigma)
}

/// Walk the image as a grid of square blocks and score each one
pub fn sample_blocks(gray: &GrayImage, block_size: u32) -> Vec<Block> {
    let (width, height) = gray.dimensions();
    let block_size = block_size.max(1);
    let mut blocks = Vec::new();

    let mut y = 0;
    while y + block_size <= height {
        let mut x = 0;
        while x + block_size <= width {
            blocks.push(score_block(gray, x, y, block_size));
            x += block_size;
        }
        y += block_size;
    }

    blocks
}

fn score_block(gray: &GrayImage, block_x: u32, block_y: u32, size: u32) -> Block {
    let mut sum: u64 = 0;
    let mut gradient_sum: u64 = 0;
    let mut count: u64 = 0;
    let mut gradient_count: u64 = 0;

    for y in block_y..block_y + size {
        for x in block_x..block_x + size {
            let value = gray.get_pixel(x, y)[0];
            sum += value as u64;
            count += 1;

            if x + 1 < block_x + size {
                let next = gray.get_pixel(x + 1, y)[0];
                gradient_sum += value.abs_diff(next) as u64;
                gradient_count += 1;
            }
        }
    }

    Block {
        x: block_x,
        y: block_y,
        size,
        brightness: if count > 0 { sum as f32 / count as f32 } else { 0.0 },
        edge_score: if gradient_count > 0 {
            gradient_sum as f32 / gradient_count as f32
        } else {
            0.0
        },
    }
}

/// Keep blocks that look bright and busy enough to pass for a plate
pub fn filter_candidates(blocks: &[Block], min_brightness: f32, min_edge_score: f32) -> Vec<Block> {
    blocks
        .iter()
        .filter(|b| b.brightness >= min_brightness && b.edge_score >= min_edge_score)
        .copied()
        .collect()
}

/// Highest-scoring candidate, if any
pub fn best_candidate(candidates: &[Block]) -> Option<Block> {
    candidates
        .iter()
        .max_by(|a, b| a.score().total_cmp(&b.score()))
        .copied()
}
