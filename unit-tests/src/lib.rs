//! Host-side doubles for the engine's hardware collaborators and the I²C bus

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, I2c, Operation};

use gforce_core::config::LEDS;
use gforce_core::{Acceleration, PixelFrame, PixelSink, Rgb, SensorSource, StatusIndicator};

/// Assert that two floats are within `epsilon` of each other
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, epsilon: f32) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {expected} ± {epsilon}, got {actual}"
    );
}

/// Error reported by the doubles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

impl i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Sensor that replays a script of readings
///
/// Once the script is exhausted it repeats the fallback reading, or fails
/// when there is none.
#[derive(Debug, Default)]
pub struct ScriptedSensor {
    script: VecDeque<Result<Acceleration, BusError>>,
    fallback: Option<Acceleration>,
    reads: usize,
}

impl ScriptedSensor {
    /// Sensor that always returns the same reading (m/s²)
    pub fn constant(x: f32, y: f32, z: f32) -> Self {
        Self {
            fallback: Some(Acceleration::new(x, y, z)),
            ..Self::default()
        }
    }

    /// Sensor that fails on every read
    pub fn failing() -> Self {
        Self::default()
    }

    /// Queue a reading before the fallback kicks in
    #[must_use]
    pub fn then(mut self, x: f32, y: f32, z: f32) -> Self {
        self.script.push_back(Ok(Acceleration::new(x, y, z)));
        self
    }

    /// Queue a failing read
    #[must_use]
    pub fn then_fail(mut self) -> Self {
        self.script.push_back(Err(BusError));
        self
    }

    /// Number of read attempts so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl SensorSource for ScriptedSensor {
    type Error = BusError;

    fn read(&mut self) -> Result<Acceleration, Self::Error> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(result) => result,
            None => self.fallback.ok_or(BusError),
        }
    }
}

/// Strip that records every flushed frame
#[derive(Debug)]
pub struct RecordingStrip {
    pending: PixelFrame,
    pub shown: Vec<PixelFrame>,
    pub brightness: Option<f32>,
    pub fail_show: bool,
}

impl Default for RecordingStrip {
    fn default() -> Self {
        Self {
            pending: [Rgb::default(); LEDS],
            shown: Vec::new(),
            brightness: None,
            fail_show: false,
        }
    }
}

impl RecordingStrip {
    /// Strip whose `show` always fails
    pub fn failing() -> Self {
        Self {
            fail_show: true,
            ..Self::default()
        }
    }

    /// Last flushed frame
    pub fn last(&self) -> Option<&PixelFrame> {
        self.shown.last()
    }
}

impl PixelSink for RecordingStrip {
    type Error = BusError;

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.pending.get_mut(index) {
            *slot = color;
        }
    }

    fn set_brightness(&mut self, brightness: f32) {
        self.brightness = Some(brightness);
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        if self.fail_show {
            return Err(BusError);
        }
        self.shown.push(self.pending);
        Ok(())
    }
}

/// Status LED that records every transition
#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub history: Vec<bool>,
}

impl RecordingStatus {
    pub fn is_busy(&self) -> bool {
        self.history.last().copied().unwrap_or(false)
    }
}

impl StatusIndicator for RecordingStatus {
    fn set_busy(&mut self, busy: bool) {
        self.history.push(busy);
    }
}

/// I²C device backed by a flat register file
///
/// A write selects the register pointer (bit 7 enables auto-increment) and
/// stores any trailing bytes; a read returns bytes from the pointer on.
#[derive(Debug)]
pub struct FakeBus {
    pub address: u8,
    pub registers: [u8; 0x40],
    /// Every register write in order, as `(register, value)`
    pub writes: Vec<(u8, u8)>,
    pub fail: bool,
}

impl FakeBus {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            registers: [0; 0x40],
            writes: Vec::new(),
            fail: false,
        }
    }

    /// Set a register
    #[must_use]
    pub fn with_register(mut self, register: u8, value: u8) -> Self {
        self.registers[usize::from(register)] = value;
        self
    }

    /// Store a little-endian 16-bit value at `register` and `register + 1`
    #[must_use]
    pub fn with_i16(self, register: u8, value: i16) -> Self {
        let [lo, hi] = value.to_le_bytes();
        self.with_register(register, lo).with_register(register + 1, hi)
    }

    /// Last value written to a register
    pub fn last_write(&self, register: u8) -> Option<u8> {
        self.writes
            .iter()
            .rev()
            .find(|(reg, _)| *reg == register)
            .map(|(_, value)| *value)
    }
}

impl i2c::ErrorType for FakeBus {
    type Error = BusError;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail || address != self.address {
            return Err(BusError);
        }

        let mut pointer = 0usize;
        let mut auto_increment = false;
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    let Some((&sub_address, values)) = bytes.split_first() else {
                        continue;
                    };
                    pointer = usize::from(sub_address & 0x7F);
                    auto_increment = sub_address & 0x80 != 0;
                    for (offset, value) in values.iter().enumerate() {
                        let register = pointer + offset;
                        self.registers[register] = *value;
                        self.writes.push((register as u8, *value));
                    }
                }
                Operation::Read(buffer) => {
                    for (offset, byte) in buffer.iter_mut().enumerate() {
                        let offset = if auto_increment { offset } else { 0 };
                        *byte = self.registers[pointer + offset];
                    }
                }
            }
        }
        Ok(())
    }
}

/// Delay that returns immediately
#[derive(Debug, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
