//! GPIO / peripheral pin assignments for the TempWatch board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors: Analog (ADC1)
// ---------------------------------------------------------------------------

/// Linear temperature probe, 0 – 3.3 V.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3), see `hw_init::ADC1_CH_TEMP`.
#[allow(dead_code)]
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Indicator
// ---------------------------------------------------------------------------

/// Red alarm LED, active HIGH through a 330 Ω resistor.
pub const ALARM_LED_GPIO: i32 = 5;
