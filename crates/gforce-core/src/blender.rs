//! Per-pixel combination of the three axes
//!
//! Each axis contributes its base color attenuated by its brightness weight
//! for the pixel. The three layers are averaged pairwise in axis order,
//! `mix(mix(x, y), z)`, so the z axis always carries half of the result.

use crate::axis::AxisAccumulator;
use crate::color::{Color, PixelFrame, Rgb, palette_lookup};

/// One axis' contribution to a pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Axis color at full weight
    pub base: Color,
    /// Brightness weight (0.0-1.0)
    pub weight: f32,
}

impl Layer {
    pub const fn new(base: Color, weight: f32) -> Self {
        Self { base, weight }
    }

    /// Layer of an accumulator at the given pixel
    pub fn of(axis: &AxisAccumulator, pixel: usize) -> Self {
        Self::new(axis.base_color(), axis.brightness_weight(pixel))
    }

    /// Color of the layer: black at weight 0, base color at weight 1
    pub fn color(&self) -> Color {
        palette_lookup(self.base, self.weight)
    }
}

/// Blends the x, y and z layers of every pixel into one output color
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorBlender;

impl ColorBlender {
    pub const fn new() -> Self {
        Self
    }

    /// Combine three layers given in x, y, z order
    pub fn blend(&self, layers: [Layer; 3]) -> Color {
        let [x, y, z] = layers;
        x.color().mix(y.color()).mix(z.color())
    }

    /// Output color of a single pixel
    pub fn blend_pixel(&self, axes: &[AxisAccumulator; 3], pixel: usize) -> Rgb {
        self.blend(axes.each_ref().map(|axis| Layer::of(axis, pixel)))
            .pack()
    }

    /// Render a whole frame from the accumulators
    pub fn render(&self, axes: &[AxisAccumulator; 3], frame: &mut PixelFrame) {
        for (pixel, slot) in frame.iter_mut().enumerate() {
            *slot = self.blend_pixel(axes, pixel);
        }
    }
}
