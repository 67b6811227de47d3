//! AiP31068 character LCD driver
//!
//! HD44780-compatible controller behind an I2C front end, as found on
//! Grove 16x2 RGB-backlight modules. Every operation is one blocking
//! 2-byte transaction: a control byte selecting command or data mode,
//! then the payload byte.

use embedded_hal::delay::DelayNs;
use vigil_core::traits::CharacterDisplay;
use vigil_hal::I2cBus;

/// AiP31068 7-bit I2C address
pub const LCD_ADDR: u8 = 0x3E;

/// Control byte: Co=1, RS=0 (command follows)
const CONTROL_CMD: u8 = 0x80;
/// Control byte: Co=0, RS=1 (data follows)
const CONTROL_DATA: u8 = 0x40;

/// HD44780 command set
#[allow(dead_code)]
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const TWO_LINE: u8 = 0x08;
    pub const FONT_5X8: u8 = 0x00;
    pub const ENTRY_LEFT: u8 = 0x02;
}

/// DDRAM base address per visible row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// AiP31068 LCD controller driver
///
/// Device-side state is implicit; no shadow copy is kept in memory.
pub struct Aip31068<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> Aip31068<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Create a driver over the shared module bus
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Run the power-up initialization sequence
    ///
    /// Linear, no retries: the first failing step aborts and propagates
    /// the error; the caller decides whether that is fatal.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        // Controller needs at least 40ms after power-up
        self.delay.delay_ms(50);

        self.send_cmd(cmd::FUNCTION_SET | cmd::TWO_LINE | cmd::FONT_5X8)?;
        self.delay.delay_ms(5);

        self.send_cmd(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.delay.delay_ms(5);

        self.send_cmd(cmd::CLEAR_DISPLAY)?;
        self.delay.delay_ms(5);

        self.send_cmd(cmd::ENTRY_MODE_SET | cmd::ENTRY_LEFT)
    }

    /// Send a single command byte
    pub fn send_cmd(&mut self, command: u8) -> Result<(), I2C::Error> {
        self.i2c.write(LCD_ADDR, &[CONTROL_CMD, command])
    }

    /// Send a single character of display data
    pub fn send_data(&mut self, data: u8) -> Result<(), I2C::Error> {
        self.i2c.write(LCD_ADDR, &[CONTROL_DATA, data])
    }

    /// Write a string at the current cursor position
    ///
    /// Stops at the first failed character; the remainder is not sent.
    /// Over-length text is not validated here, the hardware wraps.
    pub fn send_str(&mut self, text: &str) -> Result<(), I2C::Error> {
        for &byte in text.as_bytes() {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Clear the display and wait out the controller's execution time
    pub fn clear(&mut self) -> Result<(), I2C::Error> {
        self.send_cmd(cmd::CLEAR_DISPLAY)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Move the cursor to a character cell
    ///
    /// `row` is clamped to the two rows the panel has.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), I2C::Error> {
        let row = row.min(1);
        let addr = col.wrapping_add(ROW_OFFSETS[row as usize]);
        self.send_cmd(cmd::SET_DDRAM_ADDR | addr)
    }
}

impl<I2C, D> CharacterDisplay for Aip31068<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        Aip31068::clear(self)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        Aip31068::set_cursor(self, col, row)
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.send_str(text)
    }
}
