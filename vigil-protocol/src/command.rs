//! Command grammar for the host link
//!
//! Commands follow `<TYPE>:<VALUE>`. Parsing borrows from the completed
//! line; a [`Command`] lives only for the duration of one dispatch call.

/// Errors that can occur while parsing a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No `:` separator in the line
    MissingSeparator,
    /// Separator present but the type tag is not recognized
    UnknownType,
    /// RGB payload is not three decimal values in 0-255
    RgbPayload,
}

/// A parsed host command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Set the LCD backlight color
    Rgb { r: u8, g: u8, b: u8 },
    /// Replace the LCD text; `line2` is everything after the first `|`
    Text {
        line1: &'a str,
        line2: Option<&'a str>,
    },
    /// Drive the buzzer output
    Buzzer { on: bool },
}

impl<'a> Command<'a> {
    /// Parse one completed command line
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        let (kind, value) = line.split_once(':').ok_or(ParseError::MissingSeparator)?;

        match kind {
            "RGB" => parse_rgb(value),
            "L" => Ok(match value.split_once('|') {
                // Everything after the first separator is row 1, verbatim
                Some((line1, line2)) => Command::Text {
                    line1,
                    line2: Some(line2),
                },
                None => Command::Text {
                    line1: value,
                    line2: None,
                },
            }),
            // Anything that is not 1 (including unparseable text) turns
            // the buzzer off, as the original firmware's atoi did.
            "B" => Ok(Command::Buzzer {
                on: value.trim_start().parse::<i32>().unwrap_or(0) == 1,
            }),
            _ => Err(ParseError::UnknownType),
        }
    }
}

/// Parse `r,g,b` as three decimal channel values
///
/// Extra fields after the third are ignored; leading whitespace in a field
/// is accepted. Values outside 0-255 fail the parse, so no bus write is
/// attempted for them.
fn parse_rgb(value: &str) -> Result<Command<'_>, ParseError> {
    let mut fields = value.split(',');
    let r = channel(fields.next())?;
    let g = channel(fields.next())?;
    let b = channel(fields.next())?;
    Ok(Command::Rgb { r, g, b })
}

fn channel(field: Option<&str>) -> Result<u8, ParseError> {
    field
        .ok_or(ParseError::RgbPayload)?
        .trim_start()
        .parse()
        .map_err(|_| ParseError::RgbPayload)
}

/// Status line returned to the host after dispatching a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Backlight command accepted
    AckRgb,
    /// Text command accepted
    AckText,
    /// RGB payload did not parse
    RgbParseFailed,
    /// Line had no `:` separator
    InvalidFormat,
    /// Type tag not recognized
    UnknownCommand,
    /// Command produces no reply (buzzer)
    Silent,
}

impl Reply {
    /// The wire form of this reply, including the terminator
    pub fn as_line(&self) -> Option<&'static str> {
        Some(match self {
            Reply::AckRgb => "ACK:RGB\n",
            Reply::AckText => "ACK:L\n",
            Reply::RgbParseFailed => "ERR:RGB parse failed\n",
            Reply::InvalidFormat => "ERR:Invalid format\n",
            Reply::UnknownCommand => "ERR:Unknown command\n",
            Reply::Silent => return None,
        })
    }
}

impl From<ParseError> for Reply {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::MissingSeparator => Reply::InvalidFormat,
            ParseError::UnknownType => Reply::UnknownCommand,
            ParseError::RgbPayload => Reply::RgbParseFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let cmd = Command::parse("RGB:10,20,30").unwrap();
        assert_eq!(cmd, Command::Rgb { r: 10, g: 20, b: 30 });
    }

    #[test]
    fn test_parse_rgb_extra_fields_ignored() {
        let cmd = Command::parse("RGB:1,2,3,4").unwrap();
        assert_eq!(cmd, Command::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_parse_rgb_leading_whitespace() {
        let cmd = Command::parse("RGB: 0, 100, 255").unwrap();
        assert_eq!(cmd, Command::Rgb { r: 0, g: 100, b: 255 });
    }

    #[test]
    fn test_parse_rgb_failures() {
        assert_eq!(Command::parse("RGB:1,2"), Err(ParseError::RgbPayload));
        assert_eq!(Command::parse("RGB:a,b,c"), Err(ParseError::RgbPayload));
        assert_eq!(Command::parse("RGB:"), Err(ParseError::RgbPayload));
        assert_eq!(Command::parse("RGB:256,0,0"), Err(ParseError::RgbPayload));
        assert_eq!(Command::parse("RGB:-1,0,0"), Err(ParseError::RgbPayload));
    }

    #[test]
    fn test_parse_text_single_line() {
        let cmd = Command::parse("L:Hello").unwrap();
        assert_eq!(
            cmd,
            Command::Text {
                line1: "Hello",
                line2: None
            }
        );
    }

    #[test]
    fn test_parse_text_two_lines() {
        let cmd = Command::parse("L:Hello|World").unwrap();
        assert_eq!(
            cmd,
            Command::Text {
                line1: "Hello",
                line2: Some("World")
            }
        );
    }

    #[test]
    fn test_parse_text_only_first_pipe_splits() {
        let cmd = Command::parse("L:a|b|c").unwrap();
        assert_eq!(
            cmd,
            Command::Text {
                line1: "a",
                line2: Some("b|c")
            }
        );
    }

    #[test]
    fn test_parse_buzzer() {
        assert_eq!(Command::parse("B:1").unwrap(), Command::Buzzer { on: true });
        assert_eq!(Command::parse("B:0").unwrap(), Command::Buzzer { on: false });
        assert_eq!(Command::parse("B:2").unwrap(), Command::Buzzer { on: false });
        assert_eq!(
            Command::parse("B:nope").unwrap(),
            Command::Buzzer { on: false }
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(Command::parse("HELLO"), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(Command::parse("Q:1"), Err(ParseError::UnknownType));
        // Type tags are case sensitive
        assert_eq!(Command::parse("rgb:1,2,3"), Err(ParseError::UnknownType));
    }

    #[test]
    fn test_reply_lines() {
        assert_eq!(Reply::AckRgb.as_line(), Some("ACK:RGB\n"));
        assert_eq!(Reply::AckText.as_line(), Some("ACK:L\n"));
        assert_eq!(Reply::RgbParseFailed.as_line(), Some("ERR:RGB parse failed\n"));
        assert_eq!(Reply::InvalidFormat.as_line(), Some("ERR:Invalid format\n"));
        assert_eq!(Reply::UnknownCommand.as_line(), Some("ERR:Unknown command\n"));
        assert_eq!(Reply::Silent.as_line(), None);
    }
}
