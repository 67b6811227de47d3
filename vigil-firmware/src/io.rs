//! Chip adapters mapping embassy-stm32 peripherals onto the vigil-hal traits

use core::cell::RefCell;
use core::convert::Infallible;

use embassy_stm32::adc::Adc;
use embassy_stm32::gpio::Output;
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::{Async, Blocking};
use embassy_stm32::peripherals::{ADC1, PA0, PA1, PA4, PB0};
use embassy_stm32::usart::{self, UartTx};

use vigil_core::traits::BuzzerOutput;
use vigil_hal::{I2cBus, RawSampleSet, SampleSource, SerialTx};

/// I2C bus carrying the LCD module, shared by the display and backlight
/// drivers.
///
/// Interior mutability only. Every bus user lives in the bridge task, so
/// borrows never overlap.
pub struct ModuleBus {
    i2c: RefCell<I2c<'static, Blocking>>,
}

impl ModuleBus {
    pub fn new(i2c: I2c<'static, Blocking>) -> Self {
        Self {
            i2c: RefCell::new(i2c),
        }
    }

    pub fn handle(&self) -> ModuleBusHandle<'_> {
        ModuleBusHandle { bus: self }
    }
}

pub struct ModuleBusHandle<'a> {
    bus: &'a ModuleBus,
}

impl I2cBus for ModuleBusHandle<'_> {
    type Error = embassy_stm32::i2c::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.i2c.borrow_mut().blocking_write(address, data)
    }
}

/// Host-facing serial transmitter.
pub struct HostTx {
    tx: UartTx<'static, Async>,
}

impl HostTx {
    pub fn new(tx: UartTx<'static, Async>) -> Self {
        Self { tx }
    }
}

impl SerialTx for HostTx {
    type Error = usart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }
}

/// Buzzer drive pin.
pub struct Buzzer {
    pin: Output<'static>,
}

impl Buzzer {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl BuzzerOutput for Buzzer {
    fn set_active(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// The four-channel analog front end: thermistor plus accelerometer axes.
pub struct SensorArray {
    adc: Adc<'static, ADC1>,
    temperature: PA0,
    accel_x: PA1,
    accel_y: PA4,
    accel_z: PB0,
}

impl SensorArray {
    pub fn new(
        adc: Adc<'static, ADC1>,
        temperature: PA0,
        accel_x: PA1,
        accel_y: PA4,
        accel_z: PB0,
    ) -> Self {
        Self {
            adc,
            temperature,
            accel_x,
            accel_y,
            accel_z,
        }
    }
}

impl SampleSource for SensorArray {
    type Error = Infallible;

    fn read(&mut self) -> Result<RawSampleSet, Self::Error> {
        Ok(RawSampleSet {
            temperature: self.adc.blocking_read(&mut self.temperature),
            accel_x: self.adc.blocking_read(&mut self.accel_x),
            accel_y: self.adc.blocking_read(&mut self.accel_y),
            accel_z: self.adc.blocking_read(&mut self.accel_z),
        })
    }
}
