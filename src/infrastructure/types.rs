use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;

use gforce_core::GForceEngine;
use gforce_lis3dh::Lis3dh;

use crate::infrastructure::drivers::{EspPixelStrip, StatusLed};

pub type BoardSensor = Lis3dh<I2c<'static, Blocking>>;

pub type BoardEngine = GForceEngine<BoardSensor, EspPixelStrip<'static>, StatusLed<'static>>;
