//! Display device traits
//!
//! The LCD module carries two independent bus devices: the character
//! display controller and the backlight PWM controller. Neither keeps a
//! shadow of device state in memory - every operation sets the complete
//! relevant state, so repeated commands are idempotent.

/// Character display controller
///
/// A 2-row character LCD. Text longer than a row is wrapped or truncated
/// by the hardware; software does not validate lengths.
pub trait CharacterDisplay {
    /// Error type for bus transactions
    type Error;

    /// Clear the entire display
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the write cursor
    ///
    /// `row` is clamped to the two available rows.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write text at the current cursor position
    ///
    /// Stops at the first failed character transaction.
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// RGB backlight PWM controller
pub trait RgbBacklight {
    /// Error type for bus transactions
    type Error;

    /// Set all three channel intensities
    ///
    /// A mid-sequence failure may leave the device partially configured;
    /// the caller decides whether to reissue the command.
    fn set_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<(), Self::Error>;
}
