//! Linear analog temperature sensor.
//!
//! The probe outputs a voltage that falls 20 mV per degree from 100 °C at
//! 0 V, read through the ESP32-S3 ADC1 oneshot API.  The transfer function
//! is exposed as the pure [`raw_to_celsius`] so the conversion can be
//! tested without hardware.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH8 via `hw_init`.
//! On host/test: `hw_init` serves a simulated code that tests can inject.

use crate::app::ports::SensorSource;
use crate::drivers::hw_init;
use crate::error::SensorError;

/// Signed whole degrees Celsius.  The LCD shows two digits plus sign, so
/// meaningful values lie in [-99, 99]; nothing enforces it.
pub type Temperature = i8;

/// Convert a raw ADC code to degrees: `100 − 50 × (sample × ref / full_scale)`.
///
/// The result is truncated toward zero and saturates at the `i8` range.
/// A zero `full_scale` yields a non-finite voltage and converts to 0.
pub fn raw_to_celsius(sample: u16, ref_voltage: f32, full_scale: u16) -> Temperature {
    let volts = f32::from(sample) * (ref_voltage / f32::from(full_scale));
    (100.0 - 50.0 * volts) as Temperature
}

/// ADC-backed temperature probe.
pub struct TemperatureSensor {
    channel: u32,
}

impl TemperatureSensor {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }
}

impl SensorSource for TemperatureSensor {
    fn read(&mut self) -> Result<u16, SensorError> {
        hw_init::adc1_read(self.channel)
    }
}
