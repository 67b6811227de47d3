//! Test doubles shared by the driver tests
//!
//! `SharedBus` records every transaction and can inject a single fault
//! at a chosen attempt index, so multi-step sequences can be cut short
//! mid-flight.

use core::cell::RefCell;

use heapless::Vec;
use vigil_hal::I2cBus;

/// Fault injected by a test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// One recorded transaction: address plus payload
pub type BusWrite = (u8, Vec<u8, 8>);

#[derive(Default)]
struct BusState {
    writes: Vec<BusWrite, 64>,
    fail_at: Option<usize>,
    attempts: usize,
}

/// Recording I2C bus with interior mutability
///
/// Multiple drivers can hold handles onto the same bus, matching the
/// real topology of the LCD and backlight controllers.
pub struct SharedBus {
    state: RefCell<BusState>,
}

impl SharedBus {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(BusState::default()),
        }
    }

    /// Bus that fails the `n`-th transaction attempt (0-based)
    pub fn failing_at(n: usize) -> Self {
        let bus = Self::new();
        bus.state.borrow_mut().fail_at = Some(n);
        bus
    }

    pub fn handle(&self) -> BusHandle<'_> {
        BusHandle { bus: self }
    }

    /// Snapshot of the successful transactions so far
    pub fn writes(&self) -> Vec<BusWrite, 64> {
        self.state.borrow().writes.clone()
    }

    /// Total attempts, including the failed one
    pub fn attempts(&self) -> usize {
        self.state.borrow().attempts
    }
}

/// Driver-side handle onto a [`SharedBus`]
pub struct BusHandle<'a> {
    bus: &'a SharedBus,
}

impl I2cBus for BusHandle<'_> {
    type Error = BusFault;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusFault> {
        let mut state = self.bus.state.borrow_mut();
        let attempt = state.attempts;
        state.attempts += 1;

        if state.fail_at == Some(attempt) {
            return Err(BusFault);
        }

        let mut bytes = Vec::new();
        bytes.extend_from_slice(data).unwrap();
        state.writes.push((address, bytes)).unwrap();
        Ok(())
    }
}

/// Delay provider that elapses instantly
#[derive(Debug, Clone, Copy)]
pub struct NoopDelay;

impl embedded_hal::delay::DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
