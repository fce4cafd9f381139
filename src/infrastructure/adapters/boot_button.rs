use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use esp_hal::{
    gpio::{Event, Input, InputConfig, InputPin, Io, Pull},
    handler, peripherals, ram,
};
use log::info;

/// Stop button input and the flag it raises
struct StopButton {
    input: Input<'static>,
    stop: &'static AtomicBool,
}

static STOP_BUTTON: Mutex<CriticalSectionRawMutex, RefCell<Option<StopButton>>> =
    Mutex::new(RefCell::new(None));

/// Raise `stop` when the BOOT button is pressed
pub fn bind_stop_button(
    mux: peripherals::IO_MUX<'static>,
    pin: impl InputPin + 'static,
    stop: &'static AtomicBool,
) {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_stop_press);

    let config = InputConfig::default().with_pull(Pull::Up);
    let mut input = Input::new(pin, config);
    input.listen(Event::FallingEdge);

    STOP_BUTTON.lock(|cell| {
        cell.borrow_mut().replace(StopButton { input, stop });
    });
}

#[handler]
#[ram]
fn handle_stop_press() {
    STOP_BUTTON.lock(|cell| {
        let mut cell = cell.borrow_mut();
        let Some(button) = cell.as_mut() else {
            return;
        };
        if !button.input.is_interrupt_set() {
            return;
        }
        button.input.clear_interrupt();
        // Latched until reset
        button.input.unlisten();

        if !button.stop.swap(true, Ordering::Relaxed) {
            info!("Stop requested");
        }
    });
}
