//! Serial receive task
//!
//! Pulls bytes off the host UART one at a time and accumulates them into
//! command lines. The task owns the accumulator outright; only completed
//! lines cross to the bridge loop, via [`COMMAND_LINE`].

use defmt::{info, trace, warn};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartRx;
use embassy_time::{Duration, Timer};
use vigil_protocol::LineAccumulator;

use crate::channels::COMMAND_LINE;

#[embassy_executor::task]
pub async fn command_rx_task(mut rx: UartRx<'static, Async>) {
    info!("Command RX task started");

    let mut accumulator = LineAccumulator::new();
    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(()) => {
                if let Some(line) = accumulator.feed(buf[0]) {
                    trace!("Command line complete: {}", line.as_str());
                    COMMAND_LINE.signal(line);
                }
            }
            Err(e) => {
                // Reception must never stall: note the error and re-arm.
                warn!("Host serial read error: {:?}", e);
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}
