mod led_ws2812;
mod status_led;

pub use led_ws2812::EspPixelStrip;
pub use status_led::StatusLed;
