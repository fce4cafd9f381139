//! Float helpers for `no_std` targets

/// Rescale a value from one range to another
///
/// The denominator adds `to_min` to the source span, so the map is only a
/// plain linear rescale when `to_min` is zero. Readings are bucketed with
/// `to_min = 0`, which keeps `scale(-5, ..) = 0` and `scale(5, ..) = 9`.
///
/// # Arguments
/// * `val` - Reading
/// * `of_min` - Lower limit of current scale
/// * `of_max` - Upper limit of current scale
/// * `to_min` - Lower limit of destination scale
/// * `to_max` - Upper limit of destination scale
#[inline]
pub fn scale(val: f32, of_min: f32, of_max: f32, to_min: f32, to_max: f32) -> f32 {
    ((val - of_min) * (to_max - to_min)) / ((of_max - of_min) + to_min)
}

/// Fractional part of a value (`value - floor(value)`), always in `[0, 1)`
#[inline]
pub fn fract(value: f32) -> f32 {
    value - libm::floorf(value)
}

/// Integer part of a value, rounded towards negative infinity
///
/// Saturates at the `i32` limits; NaN maps to zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn floor_i32(value: f32) -> i32 {
    libm::floorf(value) as i32
}

/// Convert a normalized channel (0.0-1.0) to an 8-bit value
///
/// Multiplies by 256 and truncates, so 0.5 maps to 128 and anything at or
/// above 255/256 saturates to 255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value * 256.0).clamp(0.0, 255.0) as u8
}
