//! LIS3DH register map (subset used by the driver)

/// Register addresses
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    WhoAmI = 0x0F,
    CtrlReg1 = 0x20,
    CtrlReg4 = 0x23,
    CtrlReg5 = 0x24,
    OutXL = 0x28,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

/// Expected `WHO_AM_I` value
pub const DEVICE_ID: u8 = 0x33;

/// Sub-address flag that enables register auto-increment on multi-byte reads
pub const AUTO_INCREMENT: u8 = 0x80;

/// CTRL_REG1: X, Y and Z axes enabled
pub const CTRL1_XYZ_EN: u8 = 0x07;
/// CTRL_REG1: output data rate position
pub const CTRL1_ODR_LOC: u8 = 4;

/// CTRL_REG4: block data update
pub const CTRL4_BDU: u8 = 0x80;
/// CTRL_REG4: high resolution output
pub const CTRL4_HR: u8 = 0x08;
/// CTRL_REG4: full scale position
pub const CTRL4_FS_LOC: u8 = 4;

/// CTRL_REG5: reboot memory content
pub const CTRL5_BOOT: u8 = 0x80;

/// Output data rate
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataRate {
    PowerDown = 0b0000,
    Hz1 = 0b0001,
    Hz10 = 0b0010,
    Hz25 = 0b0011,
    Hz50 = 0b0100,
    Hz100 = 0b0101,
    Hz200 = 0b0110,
    Hz400 = 0b0111,
}

/// Full-scale measurement range
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Range {
    G2 = 0b00,
    #[default]
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

impl Range {
    /// Range covering `g` (2, 4, 8 or 16)
    pub const fn from_g(g: u8) -> Option<Self> {
        match g {
            2 => Some(Range::G2),
            4 => Some(Range::G4),
            8 => Some(Range::G8),
            16 => Some(Range::G16),
            _ => None,
        }
    }

    /// Raw 16-bit counts per g at this range
    pub const fn divider(self) -> f32 {
        match self {
            Range::G2 => 16380.0,
            Range::G4 => 8190.0,
            Range::G8 => 4096.0,
            Range::G16 => 1365.0,
        }
    }
}
