//! Tests for the plate format validator and the random plate generators.
//!
//! Tests cover:
//! - Accepted format: two digits, space, 2-3 uppercase letters, space, 3-4 digits
//! - Rejection of near-misses
//! - Every canned and synthesized plate passes the validator

use platewatch::scanner::plates;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn accepts_expected_format() {
    assert!(plates::is_valid("34 ABC 123"));
    assert!(plates::is_valid("06 AB 1234"));
    assert!(plates::is_valid("99 XYZ 9999"));
}

#[test]
fn rejects_everything_else() {
    assert!(!plates::is_valid(""));
    assert!(!plates::is_valid("34 abc 123"));
    assert!(!plates::is_valid("3 ABC 123"));
    assert!(!plates::is_valid("345 ABC 123"));
    assert!(!plates::is_valid("34 A 123"));
    assert!(!plates::is_valid("34 ABCD 123"));
    assert!(!plates::is_valid("34 ABC 12"));
    assert!(!plates::is_valid("34 ABC 12345"));
    assert!(!plates::is_valid("34ABC123"));
    assert!(!plates::is_valid(" 34 ABC 123"));
    assert!(!plates::is_valid("34 ABC 123 "));
    assert!(!plates::is_valid("34-ABC-123"));
}

#[test]
fn sample_plates_are_all_valid() {
    for plate in plates::SAMPLE_PLATES {
        assert!(
            plates::is_valid(plate),
            "sample plate {plate:?} fails the validator"
        );
    }
}

#[test]
fn synthesized_plates_are_valid() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let plate = plates::random_plate(&mut rng);
        assert!(
            plates::is_valid(&plate),
            "generated plate {plate:?} fails the validator"
        );
    }
}

#[test]
fn sampled_plates_come_from_the_list() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let plate = plates::sample_plate(&mut rng);
        assert!(plates::SAMPLE_PLATES.contains(&plate));
    }
}

#[test]
fn confidence_stays_in_band() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let confidence = plates::random_confidence(&mut rng);
        assert!((0.0..=100.0).contains(&confidence));
    }
}
