//! Hysteretic two-state alarm machine.
//!
//! ```text
//!            trip condition (opens episode)
//!   ┌────────┐ ───────────────────────────▶ ┌─────────┐
//!   │ Normal │                              │ Alarmed │
//!   └────────┘ ◀─────────────────────────── └─────────┘
//!            clear condition (closes episode)
//! ```
//!
//! The trip mode is chosen from the threshold order on **every** call:
//!
//! | Order                  | Mode      | Trip            | Clear              |
//! |------------------------|-----------|-----------------|--------------------|
//! | `alarm > turn_off`     | High-trip | `t >= alarm`    | `t <= turn_off`    |
//! | `alarm <= turn_off`    | Low-trip  | `t <= alarm`    | `t >= turn_off`    |
//!
//! Between the two trip points nothing changes (dead zone).  Changing the
//! thresholds mid-alarm can flip the mode; the open episode stays open
//! until the new clear condition holds.

pub mod blink;
pub mod history;

use log::{error, info, warn};

use crate::app::ports::IndicatorSink;
use crate::calendar::DateTime;
use crate::error::Result;
use crate::sensors::temperature::Temperature;

use blink::Blinker;
use history::{AlarmEpisode, AlarmHistoryLog};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlarmState {
    #[default]
    Normal,
    Alarmed,
}

/// Comparison direction derived from the threshold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripMode {
    /// Guard against overheating.
    High,
    /// Guard against freezing.  Also used when the thresholds are equal.
    Low,
}

impl TripMode {
    pub fn select(alarm: Temperature, turn_off: Temperature) -> Self {
        if alarm > turn_off { Self::High } else { Self::Low }
    }

    pub fn trips(self, t: Temperature, alarm: Temperature) -> bool {
        match self {
            Self::High => t >= alarm,
            Self::Low => t <= alarm,
        }
    }

    pub fn clears(self, t: Temperature, turn_off: Temperature) -> bool {
        match self {
            Self::High => t <= turn_off,
            Self::Low => t >= turn_off,
        }
    }
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// The alarm controller: thresholds, state, episode timer, history and
/// indicator timing in one owned value.  Not reentrant; drive it from a
/// single polling loop.
pub struct AlarmStateMachine {
    alarm_temperature: Temperature,
    turn_off_alarm_temperature: Temperature,
    state: AlarmState,
    /// Millis at which the open episode started.
    alarm_started_ms: u64,
    history: AlarmHistoryLog,
    blinker: Blinker,
}

impl AlarmStateMachine {
    pub fn new(alarm_temperature: Temperature, turn_off_alarm_temperature: Temperature) -> Self {
        Self::with_history(
            alarm_temperature,
            turn_off_alarm_temperature,
            AlarmHistoryLog::new(),
        )
    }

    pub fn with_history(
        alarm_temperature: Temperature,
        turn_off_alarm_temperature: Temperature,
        history: AlarmHistoryLog,
    ) -> Self {
        Self {
            alarm_temperature,
            turn_off_alarm_temperature,
            state: AlarmState::Normal,
            alarm_started_ms: 0,
            history,
            blinker: Blinker::new(100),
        }
    }

    #[must_use]
    pub fn with_blink_interval(mut self, interval_ms: u32) -> Self {
        self.blinker.set_interval(interval_ms);
        self
    }

    // ── Thresholds ────────────────────────────────────────────

    pub fn set_alarm_temperature(&mut self, t: Temperature) {
        self.alarm_temperature = t;
    }

    pub fn alarm_temperature(&self) -> Temperature {
        self.alarm_temperature
    }

    pub fn set_turn_off_alarm_temperature(&mut self, t: Temperature) {
        self.turn_off_alarm_temperature = t;
    }

    pub fn turn_off_alarm_temperature(&self) -> Temperature {
        self.turn_off_alarm_temperature
    }

    pub fn mode(&self) -> TripMode {
        TripMode::select(self.alarm_temperature, self.turn_off_alarm_temperature)
    }

    // ── Evaluation ────────────────────────────────────────────

    /// Feed one reading and drive the indicator.
    ///
    /// Errors only when a new episode cannot be recorded; the machine then
    /// stays Normal so the next tick retries the transition.
    pub fn evaluate(
        &mut self,
        current: Temperature,
        now_ms: u64,
        now: DateTime,
        indicator: &mut impl IndicatorSink,
    ) -> Result<AlarmState> {
        let mode = self.mode();

        if mode.trips(current, self.alarm_temperature) {
            if self.state == AlarmState::Normal {
                if let Err(e) = self
                    .history
                    .append(AlarmEpisode::open(self.alarm_temperature, now))
                {
                    warn!("Alarm at {}\u{00b0}C not recorded: {}", current, e);
                    return Err(e.into());
                }
                self.alarm_started_ms = now_ms;
                info!(
                    "ALARM raised: {}\u{00b0}C vs {:?}-trip {}\u{00b0}C at {}",
                    current, mode, self.alarm_temperature, now
                );
            }
            self.state = AlarmState::Alarmed;
        } else if mode.clears(current, self.turn_off_alarm_temperature) {
            if self.state == AlarmState::Alarmed {
                let duration_secs = (now_ms.saturating_sub(self.alarm_started_ms) / 1000) as u32;
                match self.history.close_last(duration_secs) {
                    Ok(()) => info!(
                        "ALARM cleared: {}\u{00b0}C after {}s",
                        current, duration_secs
                    ),
                    Err(e) => error!("ALARM cleared but episode lost: {}", e),
                }
            }
            self.state = AlarmState::Normal;
        }

        self.blinker.drive(self.state, now_ms, indicator);
        Ok(self.state)
    }

    // ── History ───────────────────────────────────────────────

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn alarms_counter(&self) -> usize {
        self.history.count()
    }

    pub fn temperature_history(&self) -> &[AlarmEpisode] {
        self.history.all()
    }

    pub fn history(&self) -> &AlarmHistoryLog {
        &self.history
    }

    /// Drop all recorded episodes.  An alarm in progress stays active but
    /// its episode is gone, so its release will not be recorded.
    pub fn clear_counter_history(&mut self) -> usize {
        self.history.clear()
    }

    pub fn set_max_episodes(&mut self, max: Option<usize>) {
        self.history.set_max_episodes(max);
    }

    pub fn set_blink_interval(&mut self, interval_ms: u32) {
        self.blinker.set_interval(interval_ms);
    }

    pub fn indicator_lit(&self) -> bool {
        self.blinker.is_lit()
    }
}
