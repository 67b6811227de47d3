//! Vigil Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits implemented by the
//! chip-specific adapters in the firmware binary. Keeping the traits
//! separate lets the drivers and dispatcher be exercised on the host
//! against simulated buses.
//!
//! # Traits
//!
//! - [`serial::SerialTx`] - Host serial link transmitter
//! - [`i2c::I2cBus`] - Blocking I2C bus transactions with a fixed timeout
//! - [`adc::SampleSource`] - Raw sensor sample acquisition

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod i2c;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use adc::{RawSampleSet, SampleSource};
pub use i2c::I2cBus;
pub use serial::SerialTx;
