//! Per-axis sample bucketing
//!
//! Every cycle each axis rescales its readings from [-5g, +5g] onto the
//! strip, sums the rescaled values per bucket and counts the samples that
//! landed there. The fractional part of a bucket sum, averaged over its
//! count, becomes that pixel's brightness for the axis.

use core::fmt;

use log::{debug, warn};

use crate::color::Color;
use crate::config::{
    BUCKET_OFFSET, INITIAL_MAX, LEDS, MAX_LED, READING_MAX, READING_MIN, SCALED_MAX, SCALED_MIN,
};
use crate::math::{floor_i32, fract, scale};

/// Accelerometer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right, shown in blue
    X,
    /// Forward/backward, shown in green
    Y,
    /// Up/down, shown in red
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Color the axis is drawn with at full weight
    pub const fn base_color(self) -> Color {
        match self {
            Axis::X => Color::BLUE,
            Axis::Y => Color::GREEN,
            Axis::Z => Color::RED,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a raw bucket index outside `0..LEDS` is mapped back onto the strip
///
/// Raw indices are `floor(scaled) - 5`, so every reading below +0.56g yields a
/// negative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketPolicy {
    /// Clamp to the first or last bucket
    #[default]
    Clamp,
    /// Wrap around the strip (`-1` is the last bucket), matching the legacy
    /// firmware that relied on negative list indexing
    Wrap,
}

impl BucketPolicy {
    /// Resolve a raw bucket index to a valid one
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn resolve(self, raw: i32) -> usize {
        match self {
            BucketPolicy::Clamp => raw.clamp(0, MAX_LED as i32) as usize,
            BucketPolicy::Wrap => raw.rem_euclid(LEDS as i32) as usize,
        }
    }
}

/// Sample accumulator for one axis
#[derive(Debug, Clone)]
pub struct AxisAccumulator {
    /// Axis this accumulator belongs to
    axis: Axis,
    /// Color at full brightness weight
    base_color: Color,
    /// Sum of rescaled readings per bucket
    buckets: [f32; LEDS],
    /// Number of readings per bucket
    counts: [u32; LEDS],
    /// Last recorded reading (g)
    reading: f32,
    /// Highest reading since startup (g)
    max: f32,
    /// Out-of-range index handling
    policy: BucketPolicy,
}

impl AxisAccumulator {
    /// Create an accumulator drawn in the axis' default color
    pub fn new(axis: Axis) -> Self {
        Self::with_color(axis, axis.base_color())
    }

    /// Create an accumulator with a custom base color
    pub fn with_color(axis: Axis, base_color: Color) -> Self {
        Self {
            axis,
            base_color,
            buckets: [0.0; LEDS],
            counts: [0; LEDS],
            reading: 0.0,
            max: INITIAL_MAX,
            policy: BucketPolicy::default(),
        }
    }

    /// Set the out-of-range index policy
    #[must_use]
    pub fn with_policy(mut self, policy: BucketPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn policy(&self) -> BucketPolicy {
        self.policy
    }

    /// Last recorded reading (g)
    pub fn reading(&self) -> f32 {
        self.reading
    }

    /// Highest reading recorded since startup (g)
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Accumulated sum of a bucket, zero for out-of-range indices
    pub fn bucket(&self, index: usize) -> f32 {
        self.buckets.get(index).copied().unwrap_or(0.0)
    }

    /// Sample count of a bucket, zero for out-of-range indices
    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Number of samples recorded since the last [`AxisAccumulator::clear`]
    pub fn total_count(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Reset buckets and counts. The running maximum is kept.
    pub fn clear(&mut self) {
        self.buckets.fill(0.0);
        self.counts.fill(0);
    }

    /// Record one reading in g-units
    ///
    /// Non-finite readings are dropped.
    pub fn record_sample(&mut self, reading: f32) {
        if !reading.is_finite() {
            warn!("{} axis: dropping non-finite reading {}", self.axis, reading);
            return;
        }

        self.reading = reading;
        // Raw reading, not magnitude
        self.max = self.max.max(reading);

        let scaled = scale(reading, READING_MIN, READING_MAX, SCALED_MIN, SCALED_MAX);
        let index = self.policy.resolve(floor_i32(scaled).saturating_sub(BUCKET_OFFSET));

        self.buckets[index] += scaled;
        self.counts[index] += 1;
    }

    /// Brightness weight of a pixel for this axis
    ///
    /// Fractional part of the bucket sum, divided by the bucket's count when it
    /// is non-zero. Out-of-range pixels have no weight.
    #[allow(clippy::cast_precision_loss)]
    pub fn brightness_weight(&self, pixel: usize) -> f32 {
        let Some(&sum) = self.buckets.get(pixel) else {
            return 0.0;
        };
        let remainder = fract(sum);
        match self.counts[pixel] {
            0 => remainder,
            count => remainder / count as f32,
        }
    }

    /// Dump counts and bucket sums to the debug log
    pub fn log_state(&self) {
        debug!(
            "{} axis: counts={:?} buckets={:?} max={}",
            self.axis, self.counts, self.buckets, self.max
        );
    }
}
