//! Alarm indicator blink timing.
//!
//! While alarmed the LED toggles once every `interval_ms` of wall time,
//! measured from the previous toggle.  The toggle clock is independent of
//! the episode timer.  Outside an alarm the LED is forced off every tick.

use crate::app::ports::IndicatorSink;

use super::AlarmState;

pub struct Blinker {
    interval_ms: u32,
    last_toggle_ms: u64,
    lit: bool,
}

impl Blinker {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_toggle_ms: 0,
            lit: false,
        }
    }

    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Whether the indicator is currently driven on.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Drive the indicator for the given state at `now_ms`.
    pub fn drive(&mut self, state: AlarmState, now_ms: u64, indicator: &mut impl IndicatorSink) {
        match state {
            AlarmState::Alarmed => {
                if now_ms.saturating_sub(self.last_toggle_ms) >= u64::from(self.interval_ms) {
                    self.lit = !self.lit;
                    indicator.set(self.lit);
                    self.last_toggle_ms = now_ms;
                }
            }
            AlarmState::Normal => {
                self.lit = false;
                indicator.set(false);
            }
        }
    }
}
