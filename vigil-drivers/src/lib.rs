//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vigil-core for the bridge's devices:
//!
//! - AiP31068 character LCD controller (I2C, 0x3E)
//! - PCA9633 RGB backlight PWM controller (I2C, 0x62)
//! - Voltage-divider thermistor model for the temperature channel

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;

#[cfg(test)]
pub(crate) mod testutil;

#[cfg(test)]
mod tests {
    //! Bridge-level test: host bytes through the real drivers on a
    //! simulated bus.

    use vigil_core::traits::BuzzerOutput;
    use vigil_core::Dispatcher;
    use vigil_protocol::{LineAccumulator, Reply};

    use crate::display::{Aip31068, Pca9633, RGB_ADDR};
    use crate::testutil::{NoopDelay, SharedBus};

    struct NoBuzzer;

    impl BuzzerOutput for NoBuzzer {
        fn set_active(&mut self, _on: bool) {}
    }

    #[test]
    fn test_rgb_command_end_to_end() {
        let bus = SharedBus::new();
        let lcd = Aip31068::new(bus.handle(), NoopDelay);
        let backlight = Pca9633::new(bus.handle());
        let mut dispatcher = Dispatcher::new(lcd, backlight, NoBuzzer);

        // Host sends the raw bytes of one command line
        let mut acc = LineAccumulator::new();
        let mut line = None;
        for &b in b"RGB:10,20,30\n" {
            if let Some(l) = acc.feed(b) {
                line = Some(l);
            }
        }

        let reply = dispatcher.dispatch(line.as_deref().unwrap());
        assert_eq!(reply.as_line(), Some("ACK:RGB\n"));

        // Exactly six backlight register writes, in order
        let writes = bus.writes();
        assert_eq!(writes.len(), 6);
        assert!(writes.iter().all(|(addr, _)| *addr == RGB_ADDR));
        let payloads: heapless::Vec<&[u8], 6> =
            writes.iter().map(|(_, bytes)| bytes.as_slice()).collect();
        assert_eq!(
            payloads.as_slice(),
            &[
                &[0x00, 0x00][..], // MODE1
                &[0x08, 0xAA][..], // LEDOUT, all channels PWM
                &[0x01, 0x00][..], // MODE2
                &[0x04, 10][..],   // red
                &[0x03, 20][..],   // green
                &[0x02, 30][..],   // blue
            ]
        );
    }

    #[test]
    fn test_malformed_rgb_never_reaches_bus() {
        let bus = SharedBus::new();
        let lcd = Aip31068::new(bus.handle(), NoopDelay);
        let backlight = Pca9633::new(bus.handle());
        let mut dispatcher = Dispatcher::new(lcd, backlight, NoBuzzer);

        assert_eq!(dispatcher.dispatch("RGB:1,2"), Reply::RgbParseFailed);
        assert_eq!(dispatcher.dispatch("RGB:x,y,z"), Reply::RgbParseFailed);
        assert!(bus.writes().is_empty());
    }
}
