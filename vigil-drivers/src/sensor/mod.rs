//! Sensor conversion models

pub mod thermistor;

pub use thermistor::{Thermistor, FAULT_TEMP_C};
