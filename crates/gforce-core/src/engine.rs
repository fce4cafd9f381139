//! G-force engine - sampling/rendering state machine
//!
//! The engine is the central coordinator that:
//! - Clears the accumulators and lights the busy indicator
//! - Samples the sensor a fixed number of times per cycle
//! - Renders one frame from the accumulated buckets
//! - Flushes the frame to the strip in a single transfer

use core::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};

use crate::axis::{Axis, AxisAccumulator, BucketPolicy};
use crate::blender::ColorBlender;
use crate::color::{PixelFrame, Rgb};
use crate::config::{LEDS, SAMPLES};
use crate::driver::{PixelSink, SensorSource, StatusIndicator};
use crate::error::Error;

/// Engine state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Collecting sensor readings into the accumulators
    Sampling,
    /// Turning the accumulators into a frame
    Rendering,
}

/// Cooperative stop request checked between cycles
pub trait StopSignal {
    fn is_stopped(&self) -> bool;
}

impl StopSignal for AtomicBool {
    fn is_stopped(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Result type of engine operations
pub type EngineResult<T, S, P> =
    Result<T, Error<<S as SensorSource>::Error, <P as PixelSink>::Error>>;

/// G-force engine - the main orchestrator
///
/// Generic over its collaborators so that the board drivers and the host test
/// doubles are interchangeable.
pub struct GForceEngine<S, P, L> {
    /// Accelerometer
    sensor: S,
    /// LED strip
    pixels: P,
    /// Busy indicator
    status: L,
    /// Accumulators in x, y, z order
    axes: [AxisAccumulator; 3],
    /// Pixel blender
    blender: ColorBlender,
    /// Last rendered frame
    frame: PixelFrame,
    /// Current state
    state: EngineState,
    /// Readings per cycle
    samples: usize,
}

impl<S, P, L> GForceEngine<S, P, L>
where
    S: SensorSource,
    P: PixelSink,
    L: StatusIndicator,
{
    /// Create a new engine
    ///
    /// Sets the strip to full brightness, as the visualizer relies on the
    /// blend weights alone for intensity.
    pub fn new(sensor: S, mut pixels: P, status: L) -> Self {
        pixels.set_brightness(1.0);
        Self {
            sensor,
            pixels,
            status,
            axes: Axis::ALL.map(AxisAccumulator::new),
            blender: ColorBlender::new(),
            frame: [Rgb::default(); LEDS],
            state: EngineState::Sampling,
            samples: SAMPLES,
        }
    }

    /// Override the strip brightness (0.0-1.0)
    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.pixels.set_brightness(brightness);
        self
    }

    /// Set the out-of-range bucket policy of all axes
    #[must_use]
    pub fn with_policy(mut self, policy: BucketPolicy) -> Self {
        self.axes = self.axes.map(|axis| axis.with_policy(policy));
        self
    }

    /// Override the number of readings per cycle
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Get current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Last rendered frame
    pub fn frame(&self) -> &PixelFrame {
        &self.frame
    }

    /// Accumulator of an axis
    pub fn accumulator(&self, axis: Axis) -> &AxisAccumulator {
        &self.axes[axis as usize]
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    pub fn status(&self) -> &L {
        &self.status
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, P, L) {
        (self.sensor, self.pixels, self.status)
    }

    /// Run one full sampling and rendering cycle
    pub fn cycle(&mut self) -> EngineResult<(), S, P> {
        self.sample()?;
        self.render();
        self.flush()
    }

    /// Run cycles until `stop` is raised
    ///
    /// The signal is checked before every cycle. Returns the number of
    /// completed cycles.
    pub fn run(&mut self, stop: &impl StopSignal) -> EngineResult<u32, S, P> {
        let mut cycles = 0;
        while !stop.is_stopped() {
            self.cycle()?;
            cycles += 1;
        }
        debug!("Engine stopped after {} cycles", cycles);
        Ok(cycles)
    }

    /// Sampling phase: clear, then feed `samples` readings to the accumulators
    ///
    /// The busy indicator stays lit if the sensor fails.
    pub fn sample(&mut self) -> EngineResult<(), S, P> {
        self.state = EngineState::Sampling;
        for axis in &mut self.axes {
            axis.clear();
        }
        self.status.set_busy(true);

        for _ in 0..self.samples {
            let reading = self.sensor.read().map_err(Error::Sensor)?.to_g();
            trace!("Reading: x={} y={} z={}", reading.x, reading.y, reading.z);

            let [x, y, z] = &mut self.axes;
            x.record_sample(reading.x);
            y.record_sample(reading.y);
            z.record_sample(reading.z);
        }

        self.status.set_busy(false);
        self.state = EngineState::Rendering;
        Ok(())
    }

    /// Rendering phase: recompute the frame from the accumulators
    pub fn render(&mut self) {
        self.state = EngineState::Rendering;
        self.blender.render(&self.axes, &mut self.frame);
    }

    /// Write the frame to the strip and return to sampling
    pub fn flush(&mut self) -> EngineResult<(), S, P> {
        for axis in &self.axes {
            axis.log_state();
        }
        self.pixels.write_frame(&self.frame).map_err(Error::Pixels)?;
        self.state = EngineState::Sampling;
        Ok(())
    }
}
