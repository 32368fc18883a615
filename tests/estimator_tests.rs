use compass_heading::{Cardinal, HeadingError, HeadingEstimator, LowPassFilter, compute_heading};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;

const FLAT_ACCEL: Vector3<f32> = Vector3::new(0.0, 0.0, 9.81);
const NORTH_FIELD: Vector3<f32> = Vector3::new(0.0, 50.0, 0.0);

/// No output before both event streams have delivered at least once
#[test]
fn test_awaiting_samples_before_both_streams() {
    let mut estimator = HeadingEstimator::new();
    assert_eq!(estimator.heading(), Err(HeadingError::AwaitingSamples));

    estimator.update_accelerometer(FLAT_ACCEL);
    assert_eq!(estimator.heading(), Err(HeadingError::AwaitingSamples));
    assert_eq!(estimator.orientation(), Err(HeadingError::AwaitingSamples));

    estimator.update_magnetometer(NORTH_FIELD);
    assert_eq!(estimator.heading().unwrap().degrees, 0);
}

/// Delivery order does not matter; both orders converge to the same heading
#[test]
fn test_either_stream_may_arrive_first() {
    let mut accel_first = HeadingEstimator::new();
    accel_first.update_accelerometer(FLAT_ACCEL);
    accel_first.update_magnetometer(NORTH_FIELD);

    let mut magnet_first = HeadingEstimator::new();
    magnet_first.update_magnetometer(NORTH_FIELD);
    magnet_first.update_accelerometer(FLAT_ACCEL);

    assert_eq!(accel_first.heading(), magnet_first.heading());
}

/// Each event recomputes against the other stream's most recent value,
/// stale by at most one event interval
#[test]
fn test_stale_partner_vector_is_used() {
    let mut estimator = HeadingEstimator::new();
    estimator.update_accelerometer(FLAT_ACCEL);
    estimator.update_magnetometer(NORTH_FIELD);

    // The device turns; only the magnetometer has reported so far
    estimator.update_magnetometer(Vector3::new(50.0, 0.0, 0.0));
    let heading = estimator.heading().unwrap();
    assert_eq!(heading.degrees, 90);
    assert_eq!(heading.cardinal, Cardinal::East);
}

/// A randomly interleaved event sequence always matches the pure pipeline
/// applied to the latest pair
#[test]
fn test_random_interleaving_matches_pure_pipeline() {
    let mut rng = Pcg64::seed_from_u64(42);
    let mut estimator = HeadingEstimator::new();

    let mut latest_accel = FLAT_ACCEL;
    let mut latest_magnet = NORTH_FIELD;
    estimator.update_accelerometer(latest_accel);
    estimator.update_magnetometer(latest_magnet);

    for _ in 0..500 {
        if rng.random_range(0..2) == 0 {
            latest_accel = Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                9.81 + rng.random_range(-0.5..0.5),
            );
            estimator.update_accelerometer(latest_accel);
        } else {
            latest_magnet = Vector3::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-40.0..0.0),
            );
            estimator.update_magnetometer(latest_magnet);
        }

        assert_eq!(estimator.heading(), compute_heading(latest_accel, latest_magnet));
    }
}

/// A degenerate reading makes the heading unavailable without corrupting
/// the cache; the next good reading restores it
#[test]
fn test_recovers_from_degenerate_reading() {
    let mut estimator = HeadingEstimator::new();
    estimator.update_accelerometer(FLAT_ACCEL);
    estimator.update_magnetometer(NORTH_FIELD);

    estimator.update_magnetometer(Vector3::zeros());
    assert_eq!(estimator.heading(), Err(HeadingError::DegenerateInput));

    estimator.update_magnetometer(NORTH_FIELD);
    assert_eq!(estimator.heading().unwrap().degrees, 0);
}

/// Reset returns to the awaiting state
#[test]
fn test_reset_clears_both_streams() {
    let mut estimator = HeadingEstimator::new();
    estimator.update_accelerometer(FLAT_ACCEL);
    estimator.update_magnetometer(NORTH_FIELD);
    assert!(estimator.is_populated());

    estimator.reset();
    assert!(!estimator.is_populated());
    assert_eq!(estimator.heading(), Err(HeadingError::AwaitingSamples));
}

/// Smoothed noisy readings settle on the true bearing
#[test]
fn test_smoothing_in_front_of_estimator() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut estimator = HeadingEstimator::new();
    let mut accel_filter = LowPassFilter::new(0.1);
    let mut magnet_filter = LowPassFilter::new(0.1);

    // True bearing 120°, noisy sensors
    let bearing_rad = 120.0f32.to_radians();
    let true_magnet = Vector3::new(
        50.0 * bearing_rad.sin(),
        50.0 * bearing_rad.cos(),
        -30.0,
    );

    for _ in 0..300 {
        let noisy_accel = FLAT_ACCEL
            + Vector3::new(
                rng.random_range(-0.3..0.3),
                rng.random_range(-0.3..0.3),
                rng.random_range(-0.3..0.3),
            );
        let noisy_magnet = true_magnet
            + Vector3::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
            );

        estimator.update_accelerometer(accel_filter.update(noisy_accel));
        estimator.update_magnetometer(magnet_filter.update(noisy_magnet));
    }

    let heading = estimator.heading().unwrap();
    let error = (heading.degrees as i32 - 120).abs();
    assert!(error <= 2, "smoothed heading off by {}°: {}", error, heading);
}
