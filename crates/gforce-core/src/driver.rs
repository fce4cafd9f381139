//! Hardware abstraction layer
//!
//! The engine only talks to the board through these traits, which keeps it
//! hardware-agnostic and lets the host tests drive it with doubles.

use crate::color::{PixelFrame, Rgb};
use crate::config::STANDARD_GRAVITY;

/// Instantaneous acceleration per axis in m/s²
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert every component to g-units
    #[must_use]
    pub fn to_g(self) -> Self {
        Self {
            x: self.x / STANDARD_GRAVITY,
            y: self.y / STANDARD_GRAVITY,
            z: self.z / STANDARD_GRAVITY,
        }
    }
}

/// Source of 3-axis acceleration readings
pub trait SensorSource {
    type Error;

    /// Read one acceleration triplet in m/s²
    ///
    /// Blocks for at most one sensor conversion.
    fn read(&mut self) -> Result<Acceleration, Self::Error>;
}

/// LED strip with a fixed number of buffered pixels
///
/// Writes are buffered until [`PixelSink::show`] pushes the whole strip to
/// the hardware in one transfer.
pub trait PixelSink {
    type Error;

    /// Buffer a color for a single pixel. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set the global brightness scalar (0.0-1.0) applied on output
    fn set_brightness(&mut self, brightness: f32);

    /// Flush all buffered pixels to the strip
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Buffer a whole frame and flush it with a single [`PixelSink::show`]
    fn write_frame(&mut self, frame: &PixelFrame) -> Result<(), Self::Error> {
        for (index, color) in frame.iter().enumerate() {
            self.set_pixel(index, *color);
        }
        self.show()
    }
}

/// "Busy" indicator lit while the engine samples the sensor
pub trait StatusIndicator {
    fn set_busy(&mut self, busy: bool);
}

/// Boards without a spare LED
impl StatusIndicator for () {
    fn set_busy(&mut self, _busy: bool) {}
}
