use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::{SmartLedsWrite, brightness};
use static_cell::make_static;

use gforce_core::config::LEDS;
use gforce_core::math::unit_to_u8;
use gforce_core::{PixelSink, Rgb};

/// ESP-specific WS2812 strip using the RMT peripheral
///
/// This driver uses the ESP32's RMT (Remote Control) peripheral
/// to generate the precise timing signals required by WS2812B LEDs.
/// Pixels are buffered until [`PixelSink::show`].
pub struct EspPixelStrip<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LEDS) }>,
    colors: [Rgb; LEDS],
    brightness_level: u8,
}

impl<'a> EspPixelStrip<'a> {
    /// Create a new ESP pixel strip
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Result<Self, esp_hal::rmt::Error>
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80))?;

        // The RMT buffer lives for the entire program
        let rmt_buffer = make_static!(smart_led_buffer!(LEDS));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Ok(Self {
            adapter,
            colors: [Rgb::default(); LEDS],
            brightness_level: 255,
        })
    }
}

impl PixelSink for EspPixelStrip<'_> {
    type Error = LedAdapterError;

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    fn set_brightness(&mut self, level: f32) {
        self.brightness_level = unit_to_u8(level);
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        let iter = brightness(self.colors.iter().copied(), self.brightness_level);

        // Disable interrupts during transmission to prevent timing glitches
        critical_section::with(|_| self.adapter.write(iter))
    }
}
