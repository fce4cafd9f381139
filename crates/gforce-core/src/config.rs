//! Compile-time constants of the visualizer

/// Number of pixels on the strip (and buckets per axis)
pub const LEDS: usize = 10;

/// Highest bucket / pixel index
pub const MAX_LED: usize = LEDS - 1;

/// Accelerometer full-scale range in g
pub const ACCEL_RANGE: u8 = 4;

/// Number of sensor readings collected per cycle
pub const SAMPLES: usize = 37;

/// Standard gravity in m/s², used to convert readings to g
pub const STANDARD_GRAVITY: f32 = 9.806;

/// Lower limit of the reading range that is rescaled onto the buckets (g)
pub const READING_MIN: f32 = -5.0;

/// Upper limit of the reading range that is rescaled onto the buckets (g)
pub const READING_MAX: f32 = 5.0;

/// Lower limit of the rescaled range
pub const SCALED_MIN: f32 = 0.0;

/// Upper limit of the rescaled range
#[allow(clippy::cast_precision_loss)]
pub const SCALED_MAX: f32 = MAX_LED as f32;

/// Offset subtracted from the integer part of a rescaled reading to get its bucket
pub const BUCKET_OFFSET: i32 = 5;

/// Initial running maximum of every axis (g)
#[allow(clippy::cast_lossless)]
pub const INITIAL_MAX: f32 = ACCEL_RANGE as f32 + 1.0;
