//! Serial link abstractions
//!
//! The host-facing transmit path. Transmit is blocking with a bounded
//! timeout; the receive path is owned directly by the firmware's async
//! receive task and needs no trait seam.

/// Serial transmitter
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the serial link
    ///
    /// Blocks until all data has been written, an error occurs, or the
    /// implementation's timeout elapses.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
