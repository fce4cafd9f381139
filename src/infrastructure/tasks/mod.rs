pub mod gforce;

pub use gforce::{STOP, gforce_task, init_gforce, init_sensor};
