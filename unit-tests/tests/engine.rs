//! Tests for the sampling/rendering cycle.

use std::cell::Cell;
use std::sync::atomic::AtomicBool;

use gforce_core::config::{LEDS, SAMPLES, STANDARD_GRAVITY};
use gforce_core::{Axis, BucketPolicy, EngineState, Error, GForceEngine, Rgb, StopSignal};
use tests::{BusError, RecordingStatus, RecordingStrip, ScriptedSensor, assert_close};

type TestEngine = GForceEngine<ScriptedSensor, RecordingStrip, RecordingStatus>;

fn engine(sensor: ScriptedSensor) -> TestEngine {
    GForceEngine::new(sensor, RecordingStrip::default(), RecordingStatus::default())
}

fn upright() -> ScriptedSensor {
    ScriptedSensor::constant(0.0, 0.0, STANDARD_GRAVITY)
}

/// Stops after a fixed number of checks
struct StopAfter(Cell<u32>);

impl StopSignal for StopAfter {
    fn is_stopped(&self) -> bool {
        let remaining = self.0.get();
        if remaining == 0 {
            return true;
        }
        self.0.set(remaining - 1);
        false
    }
}

#[test]
fn new_engine_sets_full_brightness() {
    let engine = engine(upright());
    assert_eq!(engine.pixels().brightness, Some(1.0));
    assert_eq!(engine.state(), EngineState::Sampling);
}

#[test]
fn cycle_reads_fixed_number_of_samples_and_shows_once() {
    let mut engine = engine(upright());
    engine.cycle().unwrap();

    assert_eq!(engine.sensor().reads(), SAMPLES);
    assert_eq!(engine.pixels().shown.len(), 1);
    assert_eq!(engine.state(), EngineState::Sampling);
}

#[test]
fn busy_indicator_is_lit_only_while_sampling() {
    let mut engine = engine(upright());
    engine.cycle().unwrap();
    engine.cycle().unwrap();

    assert_eq!(engine.status().history, vec![true, false, true, false]);
}

#[test]
fn upright_board_weights_z_axis() {
    let mut engine = engine(upright());
    engine.cycle().unwrap();

    let z = engine.accumulator(Axis::Z);
    assert_eq!(z.count(0), 37);
    // 37 * 5.4 = 199.8
    assert_close(z.brightness_weight(0), 0.8 / 37.0, 1e-3);

    for axis in [Axis::X, Axis::Y] {
        let acc = engine.accumulator(axis);
        assert_eq!(acc.count(0), 37);
        assert_close(acc.brightness_weight(0), 0.5 / 37.0, 1e-6);
    }

    for axis in Axis::ALL {
        for pixel in 1..LEDS {
            assert_eq!(engine.accumulator(axis).brightness_weight(pixel), 0.0);
        }
    }
}

#[test]
fn upright_board_renders_dim_red_first_pixel() {
    let mut engine = engine(upright());
    engine.cycle().unwrap();

    let frame = engine.pixels().last().unwrap();
    assert_eq!(frame[0], Rgb::new(2, 0, 0));
    for pixel in &frame[1..] {
        assert_eq!(*pixel, Rgb::new(0, 0, 0));
    }
    assert_eq!(engine.frame(), frame);
}

#[test]
fn wrap_policy_moves_resting_axes_to_last_pixel() {
    let mut engine = engine(upright()).with_policy(BucketPolicy::Wrap);
    engine.cycle().unwrap();

    assert_eq!(engine.accumulator(Axis::X).count(9), 37);
    assert_eq!(engine.accumulator(Axis::Y).count(9), 37);
    assert_eq!(engine.accumulator(Axis::Z).count(0), 37);
}

#[test]
fn accumulators_are_cleared_between_cycles() {
    let mut engine = engine(upright());
    engine.cycle().unwrap();
    engine.cycle().unwrap();

    for axis in Axis::ALL {
        assert_eq!(engine.accumulator(axis).total_count(), SAMPLES as u32);
    }
}

#[test]
fn running_maximum_survives_cycles() {
    let mut sensor = upright();
    for _ in 0..SAMPLES {
        sensor = sensor.then(7.0 * STANDARD_GRAVITY, 0.0, 0.0);
    }
    let mut engine = engine(sensor);

    engine.cycle().unwrap();
    assert_close(engine.accumulator(Axis::X).max(), 7.0, 1e-4);

    engine.cycle().unwrap();
    assert_close(engine.accumulator(Axis::X).max(), 7.0, 1e-4);
    assert_close(engine.accumulator(Axis::X).reading(), 0.0, 1e-6);
}

#[test]
fn sample_count_can_be_overridden() {
    let mut engine = engine(upright()).with_samples(5);
    engine.cycle().unwrap();

    assert_eq!(engine.sensor().reads(), 5);
    assert_eq!(engine.accumulator(Axis::Z).total_count(), 5);
}

#[test]
fn sensor_failure_aborts_cycle_without_showing() {
    let mut sensor = upright();
    for _ in 0..5 {
        sensor = sensor.then(0.0, 0.0, STANDARD_GRAVITY);
    }
    let mut engine = engine(sensor.then_fail());

    assert_eq!(engine.cycle(), Err(Error::Sensor(BusError)));
    assert_eq!(engine.sensor().reads(), 6);
    assert!(engine.pixels().shown.is_empty());
    assert!(engine.status().is_busy());
    assert_eq!(engine.state(), EngineState::Sampling);
}

#[test]
fn pixel_failure_is_reported() {
    let mut engine = GForceEngine::new(
        upright(),
        RecordingStrip::failing(),
        RecordingStatus::default(),
    );

    assert_eq!(engine.cycle(), Err(Error::Pixels(BusError)));
    assert!(!engine.status().is_busy());
}

#[test]
fn run_does_nothing_when_already_stopped() {
    let mut engine = engine(upright());
    let stop = AtomicBool::new(true);

    assert_eq!(engine.run(&stop), Ok(0));
    assert_eq!(engine.sensor().reads(), 0);
    assert!(engine.pixels().shown.is_empty());
}

#[test]
fn run_checks_stop_signal_before_each_cycle() {
    let mut engine = engine(upright());

    assert_eq!(engine.run(&StopAfter(Cell::new(3))), Ok(3));
    assert_eq!(engine.pixels().shown.len(), 3);
    assert_eq!(engine.sensor().reads(), 3 * SAMPLES);
}

#[test]
fn run_propagates_fatal_errors() {
    let mut engine = engine(ScriptedSensor::failing());
    let stop = AtomicBool::new(false);

    assert_eq!(engine.run(&stop), Err(Error::Sensor(BusError)));
    assert_eq!(engine.sensor().reads(), 1);
}

#[test]
fn render_can_run_on_its_own() {
    let mut engine = engine(upright());
    engine.sample().unwrap();
    assert_eq!(engine.state(), EngineState::Rendering);

    engine.render();
    assert_eq!(engine.frame()[0], Rgb::new(2, 0, 0));
    assert!(engine.pixels().shown.is_empty());

    engine.flush().unwrap();
    assert_eq!(engine.pixels().shown.len(), 1);
}

#[test]
fn errors_describe_their_source() {
    let sensor: Error<BusError, BusError> = Error::Sensor(BusError);
    let pixels: Error<BusError, BusError> = Error::Pixels(BusError);

    assert_eq!(sensor.to_string(), "Sensor error: BusError");
    assert_eq!(pixels.to_string(), "Pixel strip error: BusError");
}

#[test]
fn brightness_can_be_overridden() {
    let engine = engine(upright()).with_brightness(0.25);
    assert_eq!(engine.pixels().brightness, Some(0.25));
}
