use gforce_core::BucketPolicy;
use gforce_core::config::ACCEL_RANGE;
use gforce_lis3dh::{DataRate, Lis3dhConfig, Range};

pub struct SensorConfig {
    pub address: u8,
    pub i2c_frequency_khz: u32,
    pub lis3dh: Lis3dhConfig,
}

pub struct LightConfig {
    /// Global strip brightness (0.0-1.0)
    pub brightness: f32,
    pub bucket_policy: BucketPolicy,
}

pub struct DeviceConfig {
    pub name: &'static str,
}

pub struct FirmwareConfig {
    pub version: &'static str,
}

const fn accel_range() -> Range {
    match Range::from_g(ACCEL_RANGE) {
        Some(range) => range,
        None => panic!("unsupported accelerometer range"),
    }
}

#[cfg(feature = "feather")]
pub const DEVICE: DeviceConfig = DeviceConfig {
    name: "G-Force Lights Feather",
};
#[cfg(not(feature = "feather"))]
pub const DEVICE: DeviceConfig = DeviceConfig {
    name: "G-Force Lights DevKit",
};

#[cfg(feature = "feather")]
pub const SENSOR: SensorConfig = SensorConfig {
    address: gforce_lis3dh::DEFAULT_ADDRESS,
    i2c_frequency_khz: 400,
    lis3dh: Lis3dhConfig {
        range: accel_range(),
        data_rate: DataRate::Hz400,
    },
};
#[cfg(not(feature = "feather"))]
pub const SENSOR: SensorConfig = SensorConfig {
    address: gforce_lis3dh::ALTERNATE_ADDRESS,
    i2c_frequency_khz: 400,
    lis3dh: Lis3dhConfig {
        range: accel_range(),
        data_rate: DataRate::Hz400,
    },
};

#[cfg(feature = "legacy-wrap")]
pub const LIGHT: LightConfig = LightConfig {
    brightness: 1.0,
    bucket_policy: BucketPolicy::Wrap,
};
#[cfg(not(feature = "legacy-wrap"))]
pub const LIGHT: LightConfig = LightConfig {
    brightness: 1.0,
    bucket_policy: BucketPolicy::Clamp,
};

pub const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

#[cfg(feature = "feather")]
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO14
    };
}
#[cfg(not(feature = "feather"))]
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

#[cfg(feature = "feather")]
#[macro_export]
macro_rules! status_gpio {
    ($p:expr) => {
        $p.GPIO13
    };
}
#[cfg(not(feature = "feather"))]
#[macro_export]
macro_rules! status_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}

#[cfg(feature = "feather")]
#[macro_export]
macro_rules! i2c_gpio {
    ($p:expr) => {
        ($p.GPIO23, $p.GPIO22)
    };
}
#[cfg(not(feature = "feather"))]
#[macro_export]
macro_rules! i2c_gpio {
    ($p:expr) => {
        ($p.GPIO21, $p.GPIO22)
    };
}
