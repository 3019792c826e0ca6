//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (serial log, display, uplink).

use crate::alarm::AlarmState;
use crate::alarm::history::AlarmEpisode;
use crate::calendar::DateTime;
use crate::error::SensorError;
use crate::sensors::temperature::Temperature;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the active thresholds).
    Started {
        alarm_temperature: Temperature,
        turn_off_alarm_temperature: Temperature,
    },

    /// Normal → Alarmed; a new episode was opened.
    AlarmRaised {
        temperature: Temperature,
        alarm_temperature: Temperature,
        at: DateTime,
        /// 1-based position of the episode in the history.
        episode: usize,
    },

    /// Alarmed → Normal.  `duration_secs` is `None` when the open episode
    /// had already been cleared from the history.
    AlarmCleared {
        temperature: Temperature,
        duration_secs: Option<u32>,
    },

    /// A threshold was changed at runtime.
    ThresholdsChanged {
        alarm_temperature: Temperature,
        turn_off_alarm_temperature: Temperature,
    },

    /// The history was wiped.
    HistoryCleared { discarded: usize },

    /// Full copy of the history, on request.
    HistoryReport(Vec<AlarmEpisode>),

    /// The sensor could not be read this tick.
    SensorFault(SensorError),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub state: AlarmState,
    pub temperature: Option<Temperature>,
    pub alarm_temperature: Temperature,
    pub turn_off_alarm_temperature: Temperature,
    pub alarms_counter: usize,
    pub uptime_ms: u64,
}
