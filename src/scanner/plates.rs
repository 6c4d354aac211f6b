use std::sync::LazyLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;

/// Canned plates for the timer-driven variant, all matching [`PLATE_PATTERN`]
pub const SAMPLE_PLATES: &[&str] = &[
    "34 ABC 123",
    "06 DF 2341",
    "35 KLM 784",
    "16 AZ 905",
    "07 TRV 4821",
    "01 BK 377",
    "55 NPR 208",
    "42 EH 1453",
];

/// Two digits, space, two or three uppercase letters, space, three or four digits
pub static PLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2} [A-Z]{2,3} [0-9]{3,4}$").unwrap());

pub fn is_valid(plate: &str) -> bool {
    PLATE_PATTERN.is_match(plate)
}

/// Pick one of the canned sample plates
pub fn sample_plate(rng: &mut impl Rng) -> &'static str {
    SAMPLE_PLATES
        .choose(rng)
        .copied()
        .unwrap_or(SAMPLE_PLATES[0])
}

/// Synthesize a plate string character by character
pub fn random_plate(rng: &mut impl Rng) -> String {
    let mut plate = String::with_capacity(11);
    plate.push(rng.random_range('0'..='9'));
    plate.push(rng.random_range('1'..='9'));
    plate.push(' ');
    for _ in 0..rng.random_range(2..=3) {
        plate.push(rng.random_range('A'..='Z'));
    }
    plate.push(' ');
    plate.push(rng.random_range('1'..='9'));
    for _ in 0..rng.random_range(2..=3) {
        plate.push(rng.random_range('0'..='9'));
    }
    plate
}

/// Random confidence percentage in a high-looking band
pub fn random_confidence(rng: &mut impl Rng) -> f32 {
    crate::models::clamp_confidence(rng.random_range(72.0..=99.5))
}
