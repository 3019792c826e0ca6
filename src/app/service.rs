//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the alarm state machine, the live configuration and
//! the ADC calibration.  All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorSource ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  ClockSource  ──▶ │       AppService       │
//! IndicatorSink ◀── │  convert · alarm · log │
//!                   └────────────────────────┘
//! ```

use log::{info, warn};

use crate::alarm::history::{AlarmEpisode, AlarmHistoryLog};
use crate::alarm::{AlarmState, AlarmStateMachine};
use crate::config::SystemConfig;
use crate::error::Result;
use crate::sensors::temperature::{Temperature, raw_to_celsius};

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ClockSource, EventSink, IndicatorSink, SensorSource};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    alarm: AlarmStateMachine,
    config: SystemConfig,
    /// Most recent successful conversion.
    last_temperature: Option<Temperature>,
    /// History length right after the open episode was appended.
    open_episode: Option<usize>,
    tick_count: u64,
    last_telemetry_ms: u64,
    last_now_ms: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** announce itself: call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let mut history = AlarmHistoryLog::with_capacity(config.history_capacity_hint);
        history.set_max_episodes(config.max_history_episodes);
        let alarm = AlarmStateMachine::with_history(
            config.alarm_temperature,
            config.turn_off_alarm_temperature,
            history,
        )
        .with_blink_interval(config.blink_interval_ms);

        Self {
            alarm,
            config,
            last_temperature: None,
            open_episode: None,
            tick_count: 0,
            last_telemetry_ms: 0,
            last_now_ms: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            alarm_temperature: self.alarm.alarm_temperature(),
            turn_off_alarm_temperature: self.alarm.turn_off_alarm_temperature(),
        });
        info!(
            "AppService started (alarm={}, turn_off={}, mode={:?})",
            self.alarm.alarm_temperature(),
            self.alarm.turn_off_alarm_temperature(),
            self.alarm.mode()
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one sampling cycle: read sensor → convert → evaluate → indicator.
    ///
    /// The `hw` parameter satisfies **all** device ports, which keeps a
    /// single mutable borrow while the port boundary stays explicit.
    /// A sensor failure is emitted, then returned; alarm state is untouched.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorSource + ClockSource + IndicatorSink),
        sink: &mut impl EventSink,
    ) -> Result<AlarmState> {
        self.tick_count += 1;
        let prev_state = self.alarm.state();

        // 1. Sample
        let raw = match hw.read() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Sensor read failed: {}", e);
                sink.emit(&AppEvent::SensorFault(e));
                return Err(e.into());
            }
        };
        let temperature =
            raw_to_celsius(raw, self.config.adc_ref_voltage, self.config.adc_full_scale);
        self.last_temperature = Some(temperature);

        // 2. Evaluate
        let now_ms = hw.now_millis();
        let now = hw.now_datetime();
        self.last_now_ms = now_ms;
        let state = self.alarm.evaluate(temperature, now_ms, now, hw)?;

        // 3. Report transitions
        match (prev_state, state) {
            (AlarmState::Normal, AlarmState::Alarmed) => {
                let episode = self.alarm.alarms_counter();
                self.open_episode = Some(episode);
                sink.emit(&AppEvent::AlarmRaised {
                    temperature,
                    alarm_temperature: self.alarm.alarm_temperature(),
                    at: now,
                    episode,
                });
            }
            (AlarmState::Alarmed, AlarmState::Normal) => {
                let duration_secs = self
                    .open_episode
                    .take()
                    .and_then(|n| self.alarm.temperature_history().get(n - 1))
                    .map(|ep| ep.duration_secs);
                sink.emit(&AppEvent::AlarmCleared {
                    temperature,
                    duration_secs,
                });
            }
            _ => {}
        }

        // 4. Telemetry
        let interval_ms = u64::from(self.config.telemetry_interval_secs) * 1000;
        if now_ms.saturating_sub(self.last_telemetry_ms) >= interval_ms {
            self.last_telemetry_ms = now_ms;
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }

        Ok(state)
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command between ticks.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        match cmd {
            AppCommand::SetAlarmTemperature(t) => {
                self.alarm.set_alarm_temperature(t);
                self.config.alarm_temperature = t;
                self.emit_thresholds(sink);
            }
            AppCommand::SetTurnOffAlarmTemperature(t) => {
                self.alarm.set_turn_off_alarm_temperature(t);
                self.config.turn_off_alarm_temperature = t;
                self.emit_thresholds(sink);
            }
            AppCommand::ClearHistory => {
                let discarded = self.clear_counter_history();
                sink.emit(&AppEvent::HistoryCleared { discarded });
            }
            AppCommand::ReportHistory => {
                sink.emit(&AppEvent::HistoryReport(
                    self.alarm.temperature_history().to_vec(),
                ));
            }
            AppCommand::UpdateConfig(new_config) => {
                if let Err(e) = new_config.validate() {
                    warn!("Rejected configuration update: {}", e);
                    return;
                }
                self.alarm.set_alarm_temperature(new_config.alarm_temperature);
                self.alarm
                    .set_turn_off_alarm_temperature(new_config.turn_off_alarm_temperature);
                self.alarm.set_blink_interval(new_config.blink_interval_ms);
                self.alarm.set_max_episodes(new_config.max_history_episodes);
                self.config = new_config;
                info!("Configuration updated at runtime");
                self.emit_thresholds(sink);
            }
        }
    }

    /// Wipe the history; returns how many episodes were discarded.
    pub fn clear_counter_history(&mut self) -> usize {
        self.open_episode = None;
        let discarded = self.alarm.clear_counter_history();
        info!("Alarm history cleared ({} episodes)", discarded);
        discarded
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.alarm.state(),
            temperature: self.last_temperature,
            alarm_temperature: self.alarm.alarm_temperature(),
            turn_off_alarm_temperature: self.alarm.turn_off_alarm_temperature(),
            alarms_counter: self.alarm.alarms_counter(),
            uptime_ms: self.last_now_ms,
        }
    }

    pub fn state(&self) -> AlarmState {
        self.alarm.state()
    }

    pub fn alarm_temperature(&self) -> Temperature {
        self.alarm.alarm_temperature()
    }

    pub fn turn_off_alarm_temperature(&self) -> Temperature {
        self.alarm.turn_off_alarm_temperature()
    }

    pub fn alarms_counter(&self) -> usize {
        self.alarm.alarms_counter()
    }

    pub fn temperature_history(&self) -> &[AlarmEpisode] {
        self.alarm.temperature_history()
    }

    pub fn last_temperature(&self) -> Option<Temperature> {
        self.last_temperature
    }

    /// Total sampling ticks attempted since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_thresholds(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::ThresholdsChanged {
            alarm_temperature: self.alarm.alarm_temperature(),
            turn_off_alarm_temperature: self.alarm.turn_off_alarm_temperature(),
        });
    }
}
