//! Voltage-divider thermistor model
//!
//! Converts a raw ADC conversion from the thermistor divider to degrees
//! Celsius using the simplified B-parameter form of the Steinhart-Hart
//! equation:
//!
//! ```text
//! R = R0 * (ADC_MAX / raw - 1)
//! 1/T = ln(R / R0) / B + 1/T0        (T0 = 298.15 K)
//! ```

use libm::logf;

/// Temperature reported for a dead channel (raw conversion of zero,
/// i.e. a shorted divider or disconnected sensor)
pub const FAULT_TEMP_C: f32 = -99.0;

/// Reference temperature in Kelvin (25°C)
const T0_KELVIN: f32 = 298.15;

/// B-parameter thermistor on a pull-up voltage divider
#[derive(Debug, Clone, Copy)]
pub struct Thermistor {
    /// Nominal resistance at 25°C, in ohms
    r0_ohms: f32,
    /// B coefficient in Kelvin
    b_coefficient: f32,
    /// Full-scale ADC conversion value
    adc_max: f32,
}

impl Thermistor {
    /// Grove temperature sensor v1.2 (NCP18WF104F03RC) on a 12-bit ADC
    pub const GROVE_V1_2: Self = Self {
        r0_ohms: 100_000.0,
        b_coefficient: 4275.0,
        adc_max: 4095.0,
    };

    /// Custom divider parameters
    pub const fn new(r0_ohms: f32, b_coefficient: f32, adc_max: f32) -> Self {
        Self {
            r0_ohms,
            b_coefficient,
            adc_max,
        }
    }

    /// Convert a raw conversion to degrees Celsius
    ///
    /// A raw value of zero would divide by zero below; it yields
    /// [`FAULT_TEMP_C`] instead of a NaN.
    pub fn celsius(&self, raw: u16) -> f32 {
        if raw == 0 {
            return FAULT_TEMP_C;
        }

        let resistance = self.r0_ohms * (self.adc_max / raw as f32 - 1.0);
        let log_r = logf(resistance / self.r0_ohms);
        let kelvin = 1.0 / (log_r / self.b_coefficient + 1.0 / T0_KELVIN);
        kelvin - 273.15
    }
}

impl Default for Thermistor {
    fn default() -> Self {
        Self::GROVE_V1_2
    }
}
