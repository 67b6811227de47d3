//! Command dispatcher
//!
//! Consumes one completed host line, invokes the addressed device and
//! produces the status reply. Runs in the main bridge loop only - all
//! bus transactions happen here, never in the receive context.

use vigil_protocol::{Command, Reply};

use crate::traits::{BuzzerOutput, CharacterDisplay, RgbBacklight};

/// Maps completed command lines to device operations
///
/// Owns the device seams for the duration of the bridge loop. Replies
/// reflect the parse outcome only: a bus failure during an acknowledged
/// command is dropped, matching the host contract of the original
/// bridge. Parse failures never touch the bus.
pub struct Dispatcher<D, B, Z> {
    display: D,
    backlight: B,
    buzzer: Z,
}

impl<D, B, Z> Dispatcher<D, B, Z>
where
    D: CharacterDisplay,
    B: RgbBacklight,
    Z: BuzzerOutput,
{
    /// Create a dispatcher over the three device seams
    pub fn new(display: D, backlight: B, buzzer: Z) -> Self {
        Self {
            display,
            backlight,
            buzzer,
        }
    }

    /// Dispatch one completed line and return the reply for the host
    pub fn dispatch(&mut self, line: &str) -> Reply {
        let cmd = match Command::parse(line) {
            Ok(cmd) => cmd,
            Err(err) => return err.into(),
        };

        match cmd {
            Command::Rgb { r, g, b } => {
                let _ = self.backlight.set_rgb(r, g, b);
                Reply::AckRgb
            }
            Command::Text { line1, line2 } => {
                let _ = self.show_text(line1, line2);
                Reply::AckText
            }
            Command::Buzzer { on } => {
                self.buzzer.set_active(on);
                Reply::Silent
            }
        }
    }

    /// Clear, then write row 0 and optionally row 1
    ///
    /// The first failing transaction aborts the remainder of the sequence.
    fn show_text(&mut self, line1: &str, line2: Option<&str>) -> Result<(), D::Error> {
        self.display.clear()?;
        self.display.set_cursor(0, 0)?;
        self.display.write_text(line1)?;

        if let Some(line2) = line2 {
            self.display.set_cursor(0, 1)?;
            self.display.write_text(line2)?;
        }

        Ok(())
    }
}
