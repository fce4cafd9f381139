#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;
use log::info;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use gforce_lights::infrastructure::adapters::bind_stop_button;
use gforce_lights::infrastructure::config::{DEVICE, FIRMWARE};
use gforce_lights::infrastructure::tasks::{STOP, gforce_task, init_gforce, init_sensor};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    info!("{} {}", DEVICE.name, FIRMWARE.version);

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // BOOT button stops the visualizer
    bind_stop_button(peripherals.IO_MUX, peripherals.GPIO0, &STOP);

    let (sda, scl) = gforce_lights::i2c_gpio!(peripherals);
    let sensor = init_sensor(peripherals.I2C0, sda, scl);
    let engine = init_gforce(
        sensor,
        peripherals.RMT,
        gforce_lights::led_gpio!(peripherals),
        gforce_lights::status_gpio!(peripherals),
    );
    spawner.spawn(gforce_task(engine)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
