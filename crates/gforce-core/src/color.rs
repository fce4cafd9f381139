//! Float colors and two-stop palettes
//!
//! Axis colors are kept as normalized floats until the very end of a render
//! pass so that attenuation by the brightness weight and the averaging of
//! three axes do not lose precision. [`Color::pack`] converts to the 8-bit
//! [`Rgb`] the strip consumes.

use smart_leds::RGB8;

use crate::config::LEDS;
use crate::math::unit_to_u8;

pub type Rgb = RGB8;

/// One rendered frame, pixel 0 first
pub type PixelFrame = [Rgb; LEDS];

/// RGB color with channels normalized to 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other`
    ///
    /// # Arguments
    /// * `other` - Target color
    /// * `amount_of_other` - Blend factor (0.0 = all self, 1.0 = all other)
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, amount_of_other: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * amount_of_other,
            g: self.g + (other.g - self.g) * amount_of_other,
            b: self.b + (other.b - self.b) * amount_of_other,
        }
    }

    /// Equal-parts mix of two colors (per-channel average)
    #[inline]
    #[must_use]
    pub fn mix(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Convert to an 8-bit color, clamping every channel
    pub fn pack(self) -> Rgb {
        Rgb {
            r: unit_to_u8(self.r),
            g: unit_to_u8(self.g),
            b: unit_to_u8(self.b),
        }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.pack()
    }
}

/// Look up a position on the two-stop palette black -> `base`
///
/// The position is clamped to 0.0-1.0, so weights above one saturate at the
/// base color instead of overshooting it.
#[inline]
pub fn palette_lookup(base: Color, position: f32) -> Color {
    let position = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };
    Color::BLACK.lerp(base, position)
}
