//! LCD module drivers
//!
//! The Grove LCD module is two independent devices on one I2C bus:
//! the AiP31068 character display controller and the PCA9633 backlight
//! PWM controller. Both speak in 2-byte register writes.

pub mod aip31068;
pub mod pca9633;

pub use aip31068::{Aip31068, LCD_ADDR};
pub use pca9633::{Pca9633, RGB_ADDR};
