//! Main bridge loop
//!
//! A single cooperative loop owns every peripheral transaction: periodic
//! telemetry acquisition and the handling of completed command lines.
//! Because both arms run in the same task, no I2C or UART transaction is
//! ever preempted mid-flight.

use defmt::{debug, warn};
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};
use vigil_core::traits::{BuzzerOutput, CharacterDisplay, RgbBacklight};
use vigil_core::Dispatcher;
use vigil_drivers::sensor::Thermistor;
use vigil_hal::{SampleSource, SerialTx};
use vigil_protocol::TelemetryRecord;

use crate::channels::COMMAND_LINE;

/// Run the bridge forever: telemetry every `interval_ms`, command
/// dispatch whenever a completed line arrives.
pub async fn run<D, B, Z, S, T>(
    mut dispatcher: Dispatcher<D, B, Z>,
    mut samples: S,
    mut host_tx: T,
    thermistor: Thermistor,
    interval_ms: u64,
) -> !
where
    D: CharacterDisplay,
    B: RgbBacklight,
    Z: BuzzerOutput,
    S: SampleSource,
    T: SerialTx,
{
    let mut ticker = Ticker::every(Duration::from_millis(interval_ms));

    loop {
        match select(ticker.next(), COMMAND_LINE.wait()).await {
            Either::First(_) => {
                send_telemetry(&mut samples, &mut host_tx, &thermistor);
            }
            Either::Second(line) => {
                debug!("Dispatching command: {}", line.as_str());
                let reply = dispatcher.dispatch(&line);
                if let Some(text) = reply.as_line() {
                    // Fire-and-forget, same as telemetry.
                    let _ = host_tx.write_blocking(text.as_bytes());
                }
            }
        }
    }
}

fn send_telemetry<S, T>(samples: &mut S, host_tx: &mut T, thermistor: &Thermistor)
where
    S: SampleSource,
    T: SerialTx,
{
    let set = match samples.read() {
        Ok(set) => set,
        Err(_) => {
            warn!("Sample acquisition failed, skipping report");
            return;
        }
    };

    let record = TelemetryRecord {
        temp_c: thermistor.celsius(set.temperature),
        accel_x: set.accel_x,
        accel_y: set.accel_y,
        accel_z: set.accel_z,
    };

    // Telemetry is best-effort; a dropped report is replaced on the
    // next tick.
    let _ = host_tx.write_blocking(record.to_line().as_bytes());
}
