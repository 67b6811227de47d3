//! Hardware abstraction traits
//!
//! These traits define the interface between the command dispatcher
//! and the device driver implementations.

pub mod buzzer;
pub mod display;

pub use buzzer::BuzzerOutput;
pub use display::{CharacterDisplay, RgbBacklight};
