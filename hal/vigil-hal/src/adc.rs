//! ADC sample acquisition abstractions
//!
//! The sensor array is scanned by hardware (DMA on the real board) into a
//! continuously-refreshed set of raw conversions. Software only ever reads
//! a snapshot of the latest values.

/// Raw ADC conversion limit (12-bit)
pub const ADC_MAX: u16 = 4095;

/// One snapshot of the four-channel sensor scan
///
/// Each value is a raw 12-bit conversion in `[0, ADC_MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSampleSet {
    /// Thermistor divider channel
    pub temperature: u16,
    /// Accelerometer X axis
    pub accel_x: u16,
    /// Accelerometer Y axis
    pub accel_y: u16,
    /// Accelerometer Z axis
    pub accel_z: u16,
}

/// Source of raw sensor samples
///
/// Implementations return the most recent snapshot of all four channels.
pub trait SampleSource {
    /// Error type for acquisition failures
    type Error;

    /// Read the latest sample set
    fn read(&mut self) -> Result<RawSampleSet, Self::Error>;
}
