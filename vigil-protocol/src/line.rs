//! Line framing for the host command channel.
//!
//! The host sends commands as ASCII lines terminated by `\n` or `\r`.
//! [`LineAccumulator`] consumes one byte at a time in the receive context
//! and emits a completed line; everything past the capacity limit is
//! silently dropped until the next terminator.

use heapless::{String, Vec};

/// Maximum payload length of one command line, excluding the terminator
///
/// Matches the original bridge's 100-byte receive buffer (99 data bytes
/// plus the NUL slot).
pub const MAX_LINE_LEN: usize = 99;

/// One completed command line, terminator stripped
pub type CommandLine = String<MAX_LINE_LEN>;

/// Byte-at-a-time accumulator for inbound command lines
///
/// Runs entirely in the receive context and must never block; the caller
/// re-arms the next byte read unconditionally so reception cannot stall.
/// The internal buffer never leaves this struct - only completed lines
/// are handed across contexts.
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator {
    buf: Vec<u8, MAX_LINE_LEN>,
}

impl LineAccumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Discard any partially accumulated line
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Feed a single received byte
    ///
    /// Returns `Some(line)` when a terminator completes a non-empty line.
    /// Terminators on an empty buffer are ignored, so `\r\n` pairs do not
    /// produce empty commands. A byte that would exceed the capacity is
    /// dropped; the truncated line is still emitted at the next terminator.
    pub fn feed(&mut self, byte: u8) -> Option<CommandLine> {
        match byte {
            b'\n' | b'\r' => {
                if self.buf.is_empty() {
                    return None;
                }
                // Commands are ASCII by contract; a line that is not valid
                // UTF-8 is discarded rather than handed to the parser.
                let line = core::str::from_utf8(&self.buf)
                    .ok()
                    .and_then(|s| CommandLine::try_from(s).ok());
                self.buf.clear();
                line
            }
            _ => {
                // Overflow protection: drop bytes once full
                let _ = self.buf.push(byte);
                None
            }
        }
    }
}
