//! System configuration parameters
//!
//! All tunable parameters for the TempWatch controller.  Defaults match the
//! factory settings of the board: 28 °C alarm, 25 °C release, 12-bit ADC
//! against a 3.3 V reference.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sensors::temperature::Temperature;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Thresholds ---
    /// Temperature at which the alarm trips.
    pub alarm_temperature: Temperature,
    /// Temperature at which an active alarm is released.
    pub turn_off_alarm_temperature: Temperature,

    // --- Sensor ---
    /// ADC reference voltage (V)
    pub adc_ref_voltage: f32,
    /// Highest raw ADC code (4095 for 12 bit)
    pub adc_full_scale: u16,

    // --- Indicator ---
    /// Half-period of the alarm blink (milliseconds)
    pub blink_interval_ms: u32,

    // --- History ---
    /// Episodes to pre-allocate at startup
    pub history_capacity_hint: usize,
    /// Optional hard limit on stored episodes; `None` = unbounded
    pub max_history_episodes: Option<usize>,

    // --- Timing ---
    /// Sensor sampling / evaluation period (milliseconds)
    pub sample_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Thresholds
            alarm_temperature: 28,
            turn_off_alarm_temperature: 25,

            // Sensor
            adc_ref_voltage: 3.3,
            adc_full_scale: 4095,

            // Indicator
            blink_interval_ms: 100, // 5 Hz blink

            // History
            history_capacity_hint: 16,
            max_history_episodes: None,

            // Timing
            sample_interval_ms: 50,       // 20 Hz
            telemetry_interval_secs: 60,  // 1/min
        }
    }
}

impl SystemConfig {
    /// Reject values that would stall the loop or divide by zero.
    ///
    /// Thresholds are deliberately unchecked: their ordering selects the
    /// trip mode.
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(Error::Config("sample_interval_ms must be non-zero"));
        }
        if self.blink_interval_ms == 0 {
            return Err(Error::Config("blink_interval_ms must be non-zero"));
        }
        if self.adc_full_scale == 0 {
            return Err(Error::Config("adc_full_scale must be non-zero"));
        }
        if self.adc_ref_voltage.is_nan() || self.adc_ref_voltage <= 0.0 {
            return Err(Error::Config("adc_ref_voltage must be positive"));
        }
        if self.max_history_episodes == Some(0) {
            return Err(Error::Config("max_history_episodes must be at least 1"));
        }
        Ok(())
    }
}
