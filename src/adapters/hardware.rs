//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the temperature probe, the clock and the alarm LED, exposing them
//! through [`SensorSource`], [`ClockSource`] and [`IndicatorSink`].  This is
//! the only module that touches actual hardware.  On non-espidf targets
//! the underlying drivers use cfg-gated simulation stubs.

use crate::adapters::time::Esp32TimeAdapter;
use crate::app::ports::{ClockSource, IndicatorSink, SensorSource};
use crate::calendar::DateTime;
use crate::drivers::alarm_led::AlarmLed;
use crate::error::SensorError;
use crate::sensors::temperature::TemperatureSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor: TemperatureSensor,
    clock: Esp32TimeAdapter,
    led: AlarmLed,
}

impl HardwareAdapter {
    pub fn new(sensor: TemperatureSensor, clock: Esp32TimeAdapter, led: AlarmLed) -> Self {
        Self { sensor, clock, led }
    }

    pub fn led_on(&self) -> bool {
        self.led.is_on()
    }
}

// ── SensorSource implementation ───────────────────────────────

impl SensorSource for HardwareAdapter {
    fn read(&mut self) -> Result<u16, SensorError> {
        self.sensor.read()
    }
}

// ── ClockSource implementation ────────────────────────────────

impl ClockSource for HardwareAdapter {
    fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    fn now_datetime(&self) -> DateTime {
        self.clock.now_datetime()
    }
}

// ── IndicatorSink implementation ──────────────────────────────

impl IndicatorSink for HardwareAdapter {
    fn set(&mut self, on: bool) {
        self.led.set(on);
    }
}
