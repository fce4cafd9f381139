//! Tests for per-axis bucketing and brightness weights.

use gforce_core::config::{INITIAL_MAX, LEDS};
use gforce_core::math::scale;
use gforce_core::{Axis, AxisAccumulator, BucketPolicy, Color};
use tests::assert_close;

fn bucket_scale(reading: f32) -> f32 {
    scale(reading, -5.0, 5.0, 0.0, 9.0)
}

// -----------------------------------------------------------------------------
// Rescaling
// -----------------------------------------------------------------------------

#[test]
fn scale_maps_reading_range_onto_buckets() {
    assert_eq!(bucket_scale(-5.0), 0.0);
    assert_eq!(bucket_scale(5.0), 9.0);
    assert_eq!(bucket_scale(0.0), 4.5);
}

#[test]
fn scale_is_monotonic_over_reading_range() {
    let mut previous = bucket_scale(-5.0);
    for step in 1..=100 {
        let reading = -5.0 + step as f32 * 0.1;
        let scaled = bucket_scale(reading);
        assert!(scaled >= previous, "scale({reading}) = {scaled} < {previous}");
        previous = scaled;
    }
}

#[test]
fn scale_keeps_destination_minimum_in_denominator() {
    // ((5 - 0) * (9 - 1)) / ((10 - 0) + 1)
    assert_close(scale(5.0, 0.0, 10.0, 1.0, 9.0), 40.0 / 11.0, 1e-6);
}

// -----------------------------------------------------------------------------
// Bucket policy
// -----------------------------------------------------------------------------

#[test]
fn clamp_policy_pins_indices_to_strip_ends() {
    assert_eq!(BucketPolicy::Clamp.resolve(-1), 0);
    assert_eq!(BucketPolicy::Clamp.resolve(-5), 0);
    assert_eq!(BucketPolicy::Clamp.resolve(4), 4);
    assert_eq!(BucketPolicy::Clamp.resolve(12), 9);
}

#[test]
fn wrap_policy_indexes_from_the_end() {
    assert_eq!(BucketPolicy::Wrap.resolve(-1), 9);
    assert_eq!(BucketPolicy::Wrap.resolve(-5), 5);
    assert_eq!(BucketPolicy::Wrap.resolve(4), 4);
    assert_eq!(BucketPolicy::Wrap.resolve(12), 2);
}

#[test]
fn clamp_is_the_default_policy() {
    assert_eq!(AxisAccumulator::new(Axis::X).policy(), BucketPolicy::Clamp);
}

// -----------------------------------------------------------------------------
// Recording samples
// -----------------------------------------------------------------------------

#[test]
fn fresh_accumulator_has_no_weight() {
    let axis = AxisAccumulator::new(Axis::Y);
    for pixel in 0..LEDS {
        assert_eq!(axis.brightness_weight(pixel), 0.0);
    }
}

#[test]
fn clear_resets_buckets_but_keeps_maximum() {
    let mut axis = AxisAccumulator::new(Axis::X);
    axis.record_sample(7.5);
    axis.record_sample(0.3);
    axis.clear();

    assert_eq!(axis.total_count(), 0);
    for pixel in 0..LEDS {
        assert_eq!(axis.bucket(pixel), 0.0);
        assert_eq!(axis.brightness_weight(pixel), 0.0);
    }
    assert_eq!(axis.max(), 7.5);
}

#[test]
fn running_maximum_never_decreases() {
    let mut axis = AxisAccumulator::new(Axis::Z);
    assert_eq!(axis.max(), INITIAL_MAX);

    let mut previous = axis.max();
    for reading in [1.0, 7.0, -9.0, 3.0, 8.0, -20.0] {
        axis.record_sample(reading);
        assert!(axis.max() >= previous);
        previous = axis.max();
    }
    assert_eq!(axis.max(), 8.0);
    assert_eq!(axis.reading(), -20.0);
}

#[test]
fn running_maximum_compares_signed_readings() {
    let mut axis = AxisAccumulator::new(Axis::X);
    axis.record_sample(-12.0);
    assert_eq!(axis.max(), INITIAL_MAX);
}

#[test]
fn zero_g_readings_land_in_first_bucket_when_clamped() {
    let mut axis = AxisAccumulator::new(Axis::X);
    for _ in 0..37 {
        axis.record_sample(0.0);
    }

    assert_eq!(axis.count(0), 37);
    assert_eq!(axis.bucket(0), 166.5);
    assert_close(axis.brightness_weight(0), 0.5 / 37.0, 1e-6);
    for pixel in 1..LEDS {
        assert_eq!(axis.count(pixel), 0);
    }
}

#[test]
fn zero_g_readings_land_in_last_bucket_when_wrapped() {
    let mut axis = AxisAccumulator::new(Axis::X).with_policy(BucketPolicy::Wrap);
    for _ in 0..37 {
        axis.record_sample(0.0);
    }

    assert_eq!(axis.count(9), 37);
    assert_eq!(axis.bucket(9), 166.5);
    assert_close(axis.brightness_weight(9), 0.5 / 37.0, 1e-6);
    assert_eq!(axis.count(0), 0);
}

#[test]
fn full_positive_reading_has_integral_sum() {
    let mut axis = AxisAccumulator::new(Axis::Y);
    axis.record_sample(5.0);

    assert_eq!(axis.count(4), 1);
    assert_eq!(axis.bucket(4), 9.0);
    assert_eq!(axis.brightness_weight(4), 0.0);
}

#[test]
fn full_negative_reading_resolves_through_policy() {
    let mut clamped = AxisAccumulator::new(Axis::Y);
    clamped.record_sample(-5.0);
    assert_eq!(clamped.count(0), 1);

    let mut wrapped = AxisAccumulator::new(Axis::Y).with_policy(BucketPolicy::Wrap);
    wrapped.record_sample(-5.0);
    assert_eq!(wrapped.count(5), 1);
}

#[test]
fn readings_beyond_range_stay_on_the_strip() {
    let mut clamped = AxisAccumulator::new(Axis::Z);
    clamped.record_sample(20.0);
    clamped.record_sample(-20.0);
    assert_eq!(clamped.count(9), 1);
    assert_eq!(clamped.count(0), 1);

    let mut wrapped = AxisAccumulator::new(Axis::Z).with_policy(BucketPolicy::Wrap);
    wrapped.record_sample(20.0);
    assert_eq!(wrapped.count(7), 1);
}

#[test]
fn non_finite_readings_are_dropped() {
    let mut axis = AxisAccumulator::new(Axis::X);
    axis.record_sample(f32::NAN);
    axis.record_sample(f32::INFINITY);
    axis.record_sample(f32::NEG_INFINITY);

    assert_eq!(axis.total_count(), 0);
    assert_eq!(axis.max(), INITIAL_MAX);
}

#[test]
fn weight_is_averaged_over_bucket_count() {
    let mut axis = AxisAccumulator::new(Axis::X);
    // 1g -> 5.4, 1.5g -> 5.85: both in bucket 0
    axis.record_sample(1.0);
    axis.record_sample(1.5);

    assert_eq!(axis.count(0), 2);
    assert_close(axis.brightness_weight(0), 0.25 / 2.0, 1e-4);
}

#[test]
fn out_of_range_pixels_have_no_weight() {
    let mut axis = AxisAccumulator::new(Axis::X);
    axis.record_sample(1.0);

    assert_eq!(axis.brightness_weight(LEDS), 0.0);
    assert_eq!(axis.bucket(LEDS), 0.0);
    assert_eq!(axis.count(LEDS), 0);
}

#[test]
fn axes_use_their_default_colors() {
    assert_eq!(AxisAccumulator::new(Axis::X).base_color(), Color::BLUE);
    assert_eq!(AxisAccumulator::new(Axis::Y).base_color(), Color::GREEN);
    assert_eq!(AxisAccumulator::new(Axis::Z).base_color(), Color::RED);

    let custom = Color::new(0.2, 0.4, 0.6);
    assert_eq!(AxisAccumulator::with_color(Axis::X, custom).base_color(), custom);
}
