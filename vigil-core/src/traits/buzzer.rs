//! Buzzer output trait

/// Digital buzzer drive
///
/// Infallible by design - the buzzer hangs off a GPIO pin, not the bus.
pub trait BuzzerOutput {
    /// Drive the buzzer on or off
    fn set_active(&mut self, on: bool);
}
