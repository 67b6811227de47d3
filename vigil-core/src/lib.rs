//! Board-agnostic core logic for the Vigil sensor bridge
//!
//! This crate contains the application logic that does not depend on
//! specific hardware implementations:
//!
//! - Device seams between the dispatcher and the drivers
//!   (character display, RGB backlight, buzzer)
//! - The command dispatcher mapping completed host lines to device
//!   operations and status replies

#![no_std]
#![deny(unsafe_code)]

pub mod dispatch;
pub mod traits;

pub use dispatch::Dispatcher;
