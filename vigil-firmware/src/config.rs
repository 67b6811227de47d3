//! Compile-time bridge configuration

use vigil_hal::i2c::I2cConfig;

/// Fixed operating parameters for the bridge.
pub struct BridgeConfig {
    /// Telemetry reporting period in milliseconds.
    pub telemetry_interval_ms: u64,
    /// Host serial link baud rate.
    pub baudrate: u32,
    /// Display module bus settings.
    pub i2c: I2cConfig,
}

pub const CONFIG: BridgeConfig = BridgeConfig {
    telemetry_interval_ms: 100,
    baudrate: 115_200,
    i2c: I2cConfig::STANDARD,
};
