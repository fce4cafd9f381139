//! Infrastructure layer - Port implementations
//!
//! This module contains the board-specific implementations of the core's
//! sensor, pixel and status ports, plus the task that drives the engine.

pub mod adapters;
pub mod config;
pub mod drivers;
pub mod tasks;
pub mod types;
