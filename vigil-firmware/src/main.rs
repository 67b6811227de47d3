//! Vigil sensor bridge firmware
//!
//! Targets an STM32F401RE Nucleo board. Bridges a thermistor and a
//! three-axis analog accelerometer to a host PC over the ST-Link serial
//! port, and drives an I2C character LCD with RGB backlight plus a
//! buzzer from host commands.
//!
//! Task layout:
//! - `command_rx_task` reads host bytes and frames command lines
//! - the main task runs the bridge loop: periodic telemetry plus
//!   command dispatch, with exclusive ownership of every output bus

#![no_std]
#![no_main]

mod channels;
mod config;
mod io;
mod tasks;

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32::adc::Adc;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz;
use embassy_stm32::usart::{self, Uart};
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_time::Delay;
use panic_probe as _;

use vigil_core::traits::{CharacterDisplay, RgbBacklight};
use vigil_core::Dispatcher;
use vigil_drivers::display::{Aip31068, Pca9633};
use vigil_drivers::sensor::Thermistor;

use crate::config::CONFIG;
use crate::io::{Buzzer, HostTx, ModuleBus, SensorArray};

bind_interrupts!(struct Irqs {
    USART2 => usart::InterruptHandler<peripherals::USART2>;
});

/// Busy-wait cycles per LED blink phase in the fault loop, roughly
/// 250 ms at the default core clock.
const FAULT_BLINK_CYCLES: u32 = 4_000_000;

/// Non-resuming fault state: interrupts off, board LED blinking until a
/// hardware reset.
fn startup_failure(mut led: Output<'static>) -> ! {
    error!("Unrecoverable startup failure, halting");
    cortex_m::interrupt::disable();
    loop {
        led.toggle();
        cortex_m::asm::delay(FAULT_BLINK_CYCLES);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vigil bridge starting");

    let p = embassy_stm32::init(Default::default());

    // LD2 doubles as the fault indicator.
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    // LCD module bus. Display and backlight share it through handles.
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8,
        p.PB9,
        Hertz(CONFIG.i2c.frequency),
        Default::default(),
    );
    let module_bus = ModuleBus::new(i2c);

    let mut lcd = Aip31068::new(module_bus.handle(), Delay);
    let mut backlight = Pca9633::new(module_bus.handle());

    // The bridge stays useful over serial even with a dead display, so
    // LCD trouble is logged rather than fatal.
    if lcd.init().is_err() {
        warn!("LCD init failed, continuing without display");
    }
    let _ = backlight.set_rgb(0, 100, 255);
    let _ = lcd.set_cursor(0, 0);
    let _ = lcd.write_text("System Online.");
    let _ = lcd.set_cursor(0, 1);
    let _ = lcd.write_text("Waiting for PC...");

    // Host serial link over the ST-Link virtual COM port.
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = CONFIG.baudrate;
    let uart = match Uart::new(
        p.USART2,
        p.PA3,
        p.PA2,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH5,
        uart_config,
    ) {
        Ok(uart) => uart,
        Err(_) => startup_failure(led),
    };
    let (tx, rx) = uart.split();

    spawner.spawn(tasks::command_rx_task(rx)).unwrap();

    let adc = Adc::new(p.ADC1);
    let sensors = SensorArray::new(adc, p.PA0, p.PA1, p.PA4, p.PB0);

    let buzzer = Buzzer::new(Output::new(p.PA8, Level::Low, Speed::Low));
    let dispatcher = Dispatcher::new(lcd, backlight, buzzer);

    info!("Peripherals up, entering bridge loop");
    tasks::bridge::run(
        dispatcher,
        sensors,
        HostTx::new(tx),
        Thermistor::default(),
        CONFIG.telemetry_interval_ms,
    )
    .await
}
