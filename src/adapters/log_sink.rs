//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).  History reports are
//! dumped as one JSON line so they can be scraped from the console.

use log::{debug, error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::display::status_lines;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                alarm_temperature,
                turn_off_alarm_temperature,
            } => {
                info!(
                    "START | alarm={}\u{00b0}C turn_off={}\u{00b0}C",
                    alarm_temperature, turn_off_alarm_temperature
                );
            }
            AppEvent::AlarmRaised {
                temperature,
                alarm_temperature,
                at,
                episode,
            } => {
                warn!(
                    "ALARM | #{} T={}\u{00b0}C threshold={}\u{00b0}C at {}",
                    episode, temperature, alarm_temperature, at
                );
            }
            AppEvent::AlarmCleared {
                temperature,
                duration_secs: Some(secs),
            } => {
                info!("CLEAR | T={}\u{00b0}C after {}s", temperature, secs);
            }
            AppEvent::AlarmCleared {
                temperature,
                duration_secs: None,
            } => {
                info!("CLEAR | T={}\u{00b0}C (episode not in history)", temperature);
            }
            AppEvent::ThresholdsChanged {
                alarm_temperature,
                turn_off_alarm_temperature,
            } => {
                info!(
                    "THRESH | alarm={}\u{00b0}C turn_off={}\u{00b0}C",
                    alarm_temperature, turn_off_alarm_temperature
                );
            }
            AppEvent::HistoryCleared { discarded } => {
                info!("HIST | cleared {} episodes", discarded);
            }
            AppEvent::HistoryReport(episodes) => match serde_json::to_string(episodes) {
                Ok(json) => info!("HIST | {} episodes {}", episodes.len(), json),
                Err(e) => error!("HIST | report encoding failed: {}", e),
            },
            AppEvent::SensorFault(e) => {
                warn!("FAULT | sensor: {}", e);
            }
            AppEvent::Telemetry(t) => {
                match t.temperature {
                    Some(temp) => {
                        info!(
                            "TELEM | state={:?} | T={}\u{00b0}C | alarm={} turn_off={} | episodes={} | up={}ms",
                            t.state,
                            temp,
                            t.alarm_temperature,
                            t.turn_off_alarm_temperature,
                            t.alarms_counter,
                            t.uptime_ms,
                        );
                        let (top, bottom) = status_lines(
                            temp,
                            t.alarm_temperature,
                            t.turn_off_alarm_temperature,
                            t.state,
                        );
                        debug!("LCD | {} | {}", top.escape_debug(), bottom.escape_debug());
                    }
                    None => info!(
                        "TELEM | state={:?} | T=n/a | alarm={} turn_off={} | episodes={} | up={}ms",
                        t.state,
                        t.alarm_temperature,
                        t.turn_off_alarm_temperature,
                        t.alarms_counter,
                        t.uptime_ms,
                    ),
                }
            }
        }
    }
}
