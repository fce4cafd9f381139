use core::sync::atomic::AtomicBool;

use embassy_futures::yield_now;
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::gpio::OutputPin;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{I2C0, RMT};
use esp_hal::time::Rate;
use log::{debug, error, info};

use gforce_core::config::LEDS;
use gforce_core::{GForceEngine, PixelSink, Rgb, StopSignal};
use gforce_lis3dh::Lis3dh;

use crate::infrastructure::config;
use crate::infrastructure::drivers::{EspPixelStrip, StatusLed};
use crate::infrastructure::types::{BoardEngine, BoardSensor};

/// Raised to stop the engine after its current cycle
pub static STOP: AtomicBool = AtomicBool::new(false);

/// Task running the g-force engine until [`STOP`] is raised or a driver fails
///
/// Yields to the executor between cycles; within a cycle the sensor reads
/// block.
#[embassy_executor::task]
pub async fn gforce_task(mut engine: BoardEngine) {
    let mut cycles: u32 = 0;
    while !STOP.is_stopped() {
        if let Err(e) = engine.cycle() {
            error!("G-force engine halted after {} cycles: {}", cycles, e);
            return;
        }
        cycles = cycles.wrapping_add(1);
        if cycles % 100 == 0 {
            debug!("{} cycles", cycles);
        }
        yield_now().await;
    }

    info!("G-force engine stopped after {} cycles", cycles);
    let (_, mut pixels, _) = engine.into_parts();
    if let Err(e) = pixels.write_frame(&[Rgb::default(); LEDS]) {
        error!("Failed to blank the strip: {:?}", e);
    }
}

/// Bring up the sensor on I2C0
pub fn init_sensor(
    i2c: I2C0<'static>,
    sda: impl PeripheralOutput<'static>,
    scl: impl PeripheralOutput<'static>,
) -> BoardSensor {
    let i2c_config =
        I2cConfig::default().with_frequency(Rate::from_khz(config::SENSOR.i2c_frequency_khz));
    let bus: I2c<'static, Blocking> = match I2c::new(i2c, i2c_config) {
        Ok(bus) => bus.with_sda(sda).with_scl(scl),
        Err(e) => panic!("Failed to configure I2C: {:?}", e),
    };

    let mut sensor = Lis3dh::new(bus, config::SENSOR.address);
    if let Err(e) = sensor.init(config::SENSOR.lis3dh, &mut Delay::new()) {
        panic!("Failed to initialize LIS3DH: {}", e);
    }
    sensor
}

/// Assemble the engine from the board drivers
pub fn init_gforce<O>(
    sensor: BoardSensor,
    rmt: RMT<'static>,
    led_pin: O,
    status_pin: impl OutputPin + 'static,
) -> BoardEngine
where
    O: PeripheralOutput<'static>,
{
    let pixels = match EspPixelStrip::new(rmt, led_pin) {
        Ok(pixels) => pixels,
        Err(e) => panic!("Failed to initialize LED strip: {:?}", e),
    };
    let status = StatusLed::new(status_pin);

    GForceEngine::new(sensor, pixels, status)
        .with_brightness(config::LIGHT.brightness)
        .with_policy(config::LIGHT.bucket_policy)
}
