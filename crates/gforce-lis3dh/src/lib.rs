#![no_std]

//! Blocking I²C driver for the ST LIS3DH 3-axis accelerometer
//!
//! Only what the visualizer needs: identity check, reboot, range/data-rate
//! setup and reading the three output registers in one burst.

pub mod registers;

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, info};

use gforce_core::config::STANDARD_GRAVITY;
use gforce_core::{Acceleration, SensorSource};

pub use registers::{DataRate, Range};
use registers::*;

/// Address with SDO/SA0 pulled high (Adafruit boards)
pub const DEFAULT_ADDRESS: u8 = 0x18;

/// Address with SDO/SA0 pulled low
pub const ALTERNATE_ADDRESS: u8 = 0x19;

/// Time the sensor needs after a reboot
const BOOT_DELAY_MS: u32 = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Lis3dhError<E> {
    /// Bus communication failed
    I2c(E),
    /// `WHO_AM_I` returned an unexpected value
    InvalidDevice(u8),
}

impl<E: fmt::Debug> fmt::Display for Lis3dhError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lis3dhError::I2c(e) => write!(f, "I2C error: {:?}", e),
            Lis3dhError::InvalidDevice(id) => write!(f, "Unexpected device id {:#04x}", id),
        }
    }
}

/// Sensor configuration applied by [`Lis3dh::init`]
#[derive(Debug, Clone, Copy)]
pub struct Lis3dhConfig {
    pub range: Range,
    pub data_rate: DataRate,
}

impl Default for Lis3dhConfig {
    fn default() -> Self {
        Self {
            range: Range::G4,
            data_rate: DataRate::Hz400,
        }
    }
}

pub struct Lis3dh<I2C> {
    i2c: I2C,
    address: u8,
    range: Range,
}

impl<I2C, E> Lis3dh<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            range: Range::default(),
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn who_am_i(&mut self) -> Result<u8, Lis3dhError<E>> {
        self.read_reg(Register::WhoAmI)
    }

    /// Verify the device, reboot it and apply `config`
    pub fn init(
        &mut self,
        config: Lis3dhConfig,
        delay: &mut impl DelayNs,
    ) -> Result<(), Lis3dhError<E>> {
        let id = self.who_am_i()?;
        if id != DEVICE_ID {
            return Err(Lis3dhError::InvalidDevice(id));
        }

        self.write_reg(Register::CtrlReg5, CTRL5_BOOT)?;
        delay.delay_ms(BOOT_DELAY_MS);

        self.write_reg(
            Register::CtrlReg1,
            ((config.data_rate as u8) << CTRL1_ODR_LOC) | CTRL1_XYZ_EN,
        )?;
        self.set_range(config.range)?;

        info!(
            "LIS3DH at {:#04x}: range {:?}, data rate {:?}",
            self.address, config.range, config.data_rate
        );
        Ok(())
    }

    /// Set the full-scale range, keeping block data update and high resolution on
    pub fn set_range(&mut self, range: Range) -> Result<(), Lis3dhError<E>> {
        self.write_reg(
            Register::CtrlReg4,
            CTRL4_BDU | CTRL4_HR | ((range as u8) << CTRL4_FS_LOC),
        )?;
        self.range = range;
        Ok(())
    }

    /// Raw left-justified 16-bit output of the three axes
    pub fn accel_raw(&mut self) -> Result<[i16; 3], Lis3dhError<E>> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(
                self.address,
                &[Register::OutXL.addr() | AUTO_INCREMENT],
                &mut buf,
            )
            .map_err(Lis3dhError::I2c)?;

        Ok([
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ])
    }

    /// Acceleration of the three axes in m/s²
    pub fn acceleration(&mut self) -> Result<Acceleration, Lis3dhError<E>> {
        let [x, y, z] = self.accel_raw()?;
        let divider = self.range.divider();
        let to_ms2 = |raw: i16| f32::from(raw) / divider * STANDARD_GRAVITY;
        Ok(Acceleration::new(to_ms2(x), to_ms2(y), to_ms2(z)))
    }

    fn read_reg(&mut self, reg: Register) -> Result<u8, Lis3dhError<E>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .map_err(Lis3dhError::I2c)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), Lis3dhError<E>> {
        debug!("write_reg {:?}({:#04X}) = {:#04x}", reg, reg.addr(), val);
        self.i2c
            .write(self.address, &[reg.addr(), val])
            .map_err(Lis3dhError::I2c)
    }
}

impl<I2C, E> SensorSource for Lis3dh<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = Lis3dhError<E>;

    fn read(&mut self) -> Result<Acceleration, Self::Error> {
        self.acceleration()
    }
}
