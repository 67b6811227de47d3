//! I2C bus abstractions
//!
//! Provides a trait for blocking I2C master writes that can be implemented
//! by chip-specific adapters. Every transaction carries one fixed short
//! timeout; failures are returned to the caller, never retried here.

/// I2C bus master
///
/// All Vigil bus traffic consists of short register writes (a control or
/// register byte followed by a value), so only the write direction is
/// abstracted.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// Blocks until the transaction completes, fails, or the implementation's
    /// timeout elapses.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Per-transaction timeout in milliseconds
    pub timeout_ms: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz), 100 ms timeout
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        timeout_ms: 100,
    };

    /// Fast mode (400 kHz), 100 ms timeout
    pub const FAST: Self = Self {
        frequency: 400_000,
        timeout_ms: 100,
    };
}
