#![no_std]

//! G-force visualizer core
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`SensorSource`], [`PixelSink`], [`StatusIndicator`])
//! - `axis` - Per-axis sample bucketing ([`AxisAccumulator`])
//! - `color` - Float colors, two-stop palettes and mixing
//! - `blender` - Per-pixel combination of the three axes ([`ColorBlender`])
//! - `engine` - Sampling/rendering state machine ([`GForceEngine`])
//!
//! The engine is generic over its collaborators, so the same loop runs on the
//! board and against test doubles on the host.

pub mod axis;
pub mod blender;
pub mod color;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod math;

pub use axis::{Axis, AxisAccumulator, BucketPolicy};
pub use blender::ColorBlender;
pub use color::{Color, PixelFrame, Rgb};
pub use driver::{Acceleration, PixelSink, SensorSource, StatusIndicator};
pub use engine::{EngineState, GForceEngine, StopSignal};
pub use error::Error;
