//! Mock hardware adapter for integration tests.
//!
//! Serves scripted sensor readings, a test-controlled clock, and records
//! every indicator write so tests can assert on the full LED history
//! without touching real ADC/GPIO registers.

use std::collections::VecDeque;

use tempwatch::app::events::AppEvent;
use tempwatch::app::ports::{ClockSource, EventSink, IndicatorSink, SensorSource};
use tempwatch::calendar::DateTime;
use tempwatch::config::SystemConfig;
use tempwatch::error::SensorError;
use tempwatch::sensors::temperature::{Temperature, raw_to_celsius};

/// 2025-01-01 00:00:00 UTC
pub const BASE_UNIX: u64 = 1_735_689_600;

/// Smallest raw ADC code that converts to `t` under the default calibration.
pub fn raw_for(t: Temperature) -> u16 {
    let c = SystemConfig::default();
    (0..=c.adc_full_scale)
        .find(|&raw| raw_to_celsius(raw, c.adc_ref_voltage, c.adc_full_scale) == t)
        .unwrap_or_else(|| panic!("no ADC code converts to {t}"))
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub now_ms: u64,
    readings: VecDeque<Result<u16, SensorError>>,
    /// Every indicator write as (millis, level).
    pub led_writes: Vec<(u64, bool)>,
    pub led_on: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            readings: VecDeque::new(),
            led_writes: Vec::new(),
            led_on: false,
        }
    }

    /// Queue a reading of `t` and move the clock to `ms`.
    pub fn sample(&mut self, t: Temperature, ms: u64) {
        self.now_ms = ms;
        self.readings.push_back(Ok(raw_for(t)));
    }

    /// Queue a failed conversion and move the clock to `ms`.
    pub fn fail(&mut self, err: SensorError, ms: u64) {
        self.now_ms = ms;
        self.readings.push_back(Err(err));
    }

    /// Number of level changes on the LED (writes that differ from the previous one).
    pub fn led_toggles(&self) -> usize {
        let mut level = false;
        let mut toggles = 0;
        for &(_, on) in &self.led_writes {
            if on != level {
                toggles += 1;
                level = on;
            }
        }
        toggles
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for MockHardware {
    fn read(&mut self) -> Result<u16, SensorError> {
        self.readings
            .pop_front()
            .expect("test ticked without queuing a reading")
    }
}

impl ClockSource for MockHardware {
    fn now_millis(&self) -> u64 {
        self.now_ms
    }

    fn now_datetime(&self) -> DateTime {
        DateTime::from_unix(BASE_UNIX + self.now_ms / 1000)
    }
}

impl IndicatorSink for MockHardware {
    fn set(&mut self, on: bool) {
        self.led_on = on;
        self.led_writes.push((self.now_ms, on));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn raised(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::AlarmRaised { .. }))
            .count()
    }

    pub fn cleared(&self) -> Vec<Option<u32>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::AlarmCleared { duration_secs, .. } => Some(*duration_secs),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
