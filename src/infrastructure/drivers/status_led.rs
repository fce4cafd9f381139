use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use gforce_core::StatusIndicator;

/// Onboard LED lit while the engine samples the sensor
pub struct StatusLed<'a> {
    pin: Output<'a>,
}

impl<'a> StatusLed<'a> {
    pub fn new(pin: impl OutputPin + 'a) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl StatusIndicator for StatusLed<'_> {
    fn set_busy(&mut self, busy: bool) {
        self.pin.set_level(Level::from(busy));
    }
}
