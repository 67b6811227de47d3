//! Telemetry line formatting
//!
//! Every sample period the bridge emits one unsolicited ASCII line:
//!
//! ```text
//! T:<temp,1dp>,X:<x>,Y:<y>,Z:<z>\n
//! ```
//!
//! An earlier bridge revision used `Temp:<t>,X:,Y:,Z:` with unsigned
//! fields; that legacy profile is not emitted by this firmware, hosts
//! still speaking it must key on the `T:` prefix instead.

use core::fmt::Write;

use heapless::String;

/// Capacity of one formatted telemetry line
pub const MAX_TELEMETRY_LEN: usize = 100;

/// One telemetry sample ready for transmission
///
/// Temperature is converted to degrees Celsius; the accelerometer axes
/// stay as raw ADC integers, host-side calibration maps them to g.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord {
    /// Temperature in degrees Celsius (sentinel -99.0 on a dead channel)
    pub temp_c: f32,
    /// Raw accelerometer X conversion
    pub accel_x: u16,
    /// Raw accelerometer Y conversion
    pub accel_y: u16,
    /// Raw accelerometer Z conversion
    pub accel_z: u16,
}

impl TelemetryRecord {
    /// Format this record as a wire line, terminator included
    pub fn to_line(&self) -> String<MAX_TELEMETRY_LEN> {
        let mut line = String::new();
        // Capacity covers every representable input, so the write is total
        let _ = write!(
            line,
            "T:{:.1},X:{},Y:{},Z:{}\n",
            self.temp_c, self.accel_x, self.accel_y, self.accel_z
        );
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        let record = TelemetryRecord {
            temp_c: 25.43,
            accel_x: 512,
            accel_y: 513,
            accel_z: 900,
        };
        assert_eq!(record.to_line().as_str(), "T:25.4,X:512,Y:513,Z:900\n");
    }

    #[test]
    fn test_format_sentinel() {
        let record = TelemetryRecord {
            temp_c: -99.0,
            accel_x: 0,
            accel_y: 0,
            accel_z: 0,
        };
        assert_eq!(record.to_line().as_str(), "T:-99.0,X:0,Y:0,Z:0\n");
    }

    #[test]
    fn test_format_one_decimal_place() {
        let record = TelemetryRecord {
            temp_c: 36.999,
            accel_x: 4095,
            accel_y: 4095,
            accel_z: 4095,
        };
        assert_eq!(record.to_line().as_str(), "T:37.0,X:4095,Y:4095,Z:4095\n");
    }
}
