//! PCA9633 RGB backlight driver
//!
//! Four-channel PWM LED controller driving the LCD backlight. The Grove
//! module wires blue/green/red to PWM0/1/2. Setting a color is six
//! register writes in fixed order; the sequence short-circuits on the
//! first failure, which can leave the device partially configured -
//! the host simply reissues the command.

use vigil_core::traits::RgbBacklight;
use vigil_hal::I2cBus;

/// PCA9633 7-bit I2C address
pub const RGB_ADDR: u8 = 0x62;

/// PCA9633 register map (the channels the module uses)
mod reg {
    pub const MODE1: u8 = 0x00;
    pub const MODE2: u8 = 0x01;
    pub const PWM_BLUE: u8 = 0x02;
    pub const PWM_GREEN: u8 = 0x03;
    pub const PWM_RED: u8 = 0x04;
    pub const LEDOUT: u8 = 0x08;
}

/// LEDOUT value putting every channel under individual PWM control
const LEDOUT_ALL_PWM: u8 = 0xAA;

/// PCA9633 backlight controller driver
pub struct Pca9633<I2C> {
    i2c: I2C,
}

impl<I2C: I2cBus> Pca9633<I2C> {
    /// Create a driver over the shared module bus
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Write one register
    pub fn set_register(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(RGB_ADDR, &[register, value])
    }
}

impl<I2C: I2cBus> RgbBacklight for Pca9633<I2C> {
    type Error = I2C::Error;

    /// Set the backlight color
    ///
    /// Re-asserts the full device configuration on every call, so
    /// identical commands always issue the same six writes.
    fn set_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<(), Self::Error> {
        self.set_register(reg::MODE1, 0x00)?;
        self.set_register(reg::LEDOUT, LEDOUT_ALL_PWM)?;
        self.set_register(reg::MODE2, 0x00)?;
        self.set_register(reg::PWM_RED, r)?;
        self.set_register(reg::PWM_GREEN, g)?;
        self.set_register(reg::PWM_BLUE, b)
    }
}
