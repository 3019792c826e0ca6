//! Integration tests for the AppService → alarm machine → indicator pipeline.
//!
//! Raw ADC codes are fed through the mock sensor so the calibration step is
//! part of every test.

use crate::mock_hw::{BASE_UNIX, MockHardware, RecordingSink};

use tempwatch::alarm::AlarmState;
use tempwatch::app::commands::AppCommand;
use tempwatch::app::events::AppEvent;
use tempwatch::app::service::AppService;
use tempwatch::calendar::DateTime;
use tempwatch::config::SystemConfig;
use tempwatch::error::{Error, HistoryError, SensorError};
use tempwatch::sensors::temperature::Temperature;

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    make_app_with(SystemConfig::default())
}

fn make_app_with(config: SystemConfig) -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(config);
    let hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

fn feed(
    app: &mut AppService,
    hw: &mut MockHardware,
    sink: &mut RecordingSink,
    samples: &[(Temperature, u64)],
) -> Vec<AlarmState> {
    samples
        .iter()
        .map(|&(t, ms)| {
            hw.sample(t, ms);
            app.tick(hw, sink).unwrap()
        })
        .collect()
}

// ── Startup ──────────────────────────────────────────────────

#[test]
fn start_announces_default_thresholds() {
    let (app, _hw, sink) = make_app();
    assert_eq!(
        sink.events,
        vec![AppEvent::Started {
            alarm_temperature: 28,
            turn_off_alarm_temperature: 25,
        }]
    );
    assert_eq!(app.state(), AlarmState::Normal);
    assert_eq!(app.alarms_counter(), 0);
}

// ── Reference scenario ───────────────────────────────────────

#[test]
fn high_trip_episode_end_to_end() {
    let (mut app, mut hw, mut sink) = make_app();

    let states = feed(
        &mut app,
        &mut hw,
        &mut sink,
        &[(20, 0), (26, 1000), (29, 2000), (29, 3000), (24, 4000), (20, 5000)],
    );

    use AlarmState::*;
    assert_eq!(states, vec![Normal, Normal, Alarmed, Alarmed, Normal, Normal]);
    assert_eq!(app.alarms_counter(), 1);
    assert_eq!(app.last_temperature(), Some(20));

    let ep = app.temperature_history()[0];
    assert_eq!(ep.alarm_temperature, 28);
    assert_eq!(ep.triggered_at, DateTime::from_unix(BASE_UNIX + 2));
    assert_eq!(ep.duration_secs, 2);

    assert_eq!(sink.raised(), 1);
    assert_eq!(sink.cleared(), vec![Some(2)]);
    assert!(sink.events.contains(&AppEvent::AlarmRaised {
        temperature: 29,
        alarm_temperature: 28,
        at: DateTime::new(2025, 1, 1, 0, 0, 2),
        episode: 1,
    }));
    assert!(!hw.led_on, "indicator must be off after the alarm clears");
}

#[test]
fn low_trip_episode_end_to_end() {
    let config = SystemConfig {
        alarm_temperature: -5,
        turn_off_alarm_temperature: 2,
        ..SystemConfig::default()
    };
    let (mut app, mut hw, mut sink) = make_app_with(config);

    let states = feed(&mut app, &mut hw, &mut sink, &[(4, 0), (-6, 1000), (0, 2000), (3, 7000)]);

    use AlarmState::*;
    assert_eq!(states, vec![Normal, Alarmed, Alarmed, Normal]);
    assert_eq!(app.temperature_history()[0].duration_secs, 6);
    assert_eq!(app.temperature_history()[0].alarm_temperature, -5);
}

#[test]
fn dead_zone_does_not_raise() {
    let (mut app, mut hw, mut sink) = make_app();
    let states = feed(&mut app, &mut hw, &mut sink, &[(26, 0), (27, 1000), (25, 2000), (26, 3000)]);
    assert!(states.iter().all(|&s| s == AlarmState::Normal));
    assert_eq!(sink.raised(), 0);
    assert_eq!(app.alarms_counter(), 0);
}

// ── Indicator ────────────────────────────────────────────────

#[test]
fn indicator_blinks_every_interval_while_alarmed() {
    let (mut app, mut hw, mut sink) = make_app();

    feed(&mut app, &mut hw, &mut sink, &[(30, 1000)]);
    let after_raise = hw.led_toggles();

    // 20 ms ticks for one second: at most one toggle per 100 ms.
    for ms in (1020..=2000).step_by(20) {
        hw.sample(30, ms);
        app.tick(&mut hw, &mut sink).unwrap();
    }
    let toggles = hw.led_toggles() - after_raise;
    assert!((9..=10).contains(&toggles), "toggles={toggles}");

    feed(&mut app, &mut hw, &mut sink, &[(20, 2050)]);
    assert!(!hw.led_on);
    assert_eq!(hw.led_writes.last(), Some(&(2050, false)));
}

#[test]
fn indicator_stays_off_in_normal() {
    let (mut app, mut hw, mut sink) = make_app();
    feed(&mut app, &mut hw, &mut sink, &[(20, 0), (21, 100), (22, 200), (23, 300)]);
    assert!(hw.led_writes.iter().all(|&(_, on)| !on));
    assert_eq!(hw.led_toggles(), 0);
}

// ── Sensor faults ────────────────────────────────────────────

#[test]
fn sensor_timeout_is_reported_and_state_untouched() {
    let (mut app, mut hw, mut sink) = make_app();
    feed(&mut app, &mut hw, &mut sink, &[(30, 0)]);

    hw.fail(SensorError::Timeout, 1000);
    let err = app.tick(&mut hw, &mut sink).unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::Timeout));
    assert_eq!(sink.events.last(), Some(&AppEvent::SensorFault(SensorError::Timeout)));
    assert_eq!(app.state(), AlarmState::Alarmed);
    assert_eq!(app.last_temperature(), Some(30));
    assert_eq!(app.tick_count(), 2);

    // The episode keeps its original start time.
    feed(&mut app, &mut hw, &mut sink, &[(20, 4000)]);
    assert_eq!(app.temperature_history()[0].duration_secs, 4);
}

// ── Commands ─────────────────────────────────────────────────

#[test]
fn threshold_commands_take_effect_next_tick() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_command(AppCommand::SetAlarmTemperature(35), &mut sink);
    app.handle_command(AppCommand::SetTurnOffAlarmTemperature(30), &mut sink);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::ThresholdsChanged {
            alarm_temperature: 35,
            turn_off_alarm_temperature: 30,
        })
    );

    let states = feed(&mut app, &mut hw, &mut sink, &[(30, 0), (35, 1000)]);
    assert_eq!(states, vec![AlarmState::Normal, AlarmState::Alarmed]);
    assert_eq!(app.temperature_history()[0].alarm_temperature, 35);
}

#[test]
fn inverting_thresholds_switches_to_low_trip() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::SetAlarmTemperature(5), &mut sink);
    app.handle_command(AppCommand::SetTurnOffAlarmTemperature(8), &mut sink);

    let states = feed(&mut app, &mut hw, &mut sink, &[(30, 0), (5, 1000), (7, 2000), (8, 3000)]);
    use AlarmState::*;
    assert_eq!(states, vec![Normal, Alarmed, Alarmed, Normal]);
}

#[test]
fn clear_history_reports_discarded_count() {
    let (mut app, mut hw, mut sink) = make_app();
    feed(&mut app, &mut hw, &mut sink, &[(30, 0), (20, 1000), (30, 2000), (20, 3000)]);
    assert_eq!(app.alarms_counter(), 2);

    app.handle_command(AppCommand::ClearHistory, &mut sink);
    assert_eq!(sink.events.last(), Some(&AppEvent::HistoryCleared { discarded: 2 }));
    assert_eq!(app.alarms_counter(), 0);
    assert!(app.temperature_history().is_empty());
}

#[test]
fn clear_history_mid_alarm_loses_duration() {
    let (mut app, mut hw, mut sink) = make_app();
    feed(&mut app, &mut hw, &mut sink, &[(30, 0)]);

    app.handle_command(AppCommand::ClearHistory, &mut sink);
    let states = feed(&mut app, &mut hw, &mut sink, &[(20, 5000)]);

    assert_eq!(states, vec![AlarmState::Normal]);
    assert_eq!(sink.cleared(), vec![None]);
    assert_eq!(app.alarms_counter(), 0);
}

#[test]
fn report_history_snapshots_episodes() {
    let (mut app, mut hw, mut sink) = make_app();
    feed(&mut app, &mut hw, &mut sink, &[(30, 0), (20, 3000)]);

    app.handle_command(AppCommand::ReportHistory, &mut sink);
    match sink.events.last() {
        Some(AppEvent::HistoryReport(episodes)) => {
            assert_eq!(episodes.len(), 1);
            assert_eq!(episodes[0].duration_secs, 3);
        }
        other => panic!("expected HistoryReport, got {other:?}"),
    }
}

#[test]
fn invalid_config_update_is_ignored() {
    let (mut app, _hw, mut sink) = make_app();
    let before = sink.events.len();

    let bad = SystemConfig {
        alarm_temperature: 40,
        sample_interval_ms: 0,
        ..SystemConfig::default()
    };
    app.handle_command(AppCommand::UpdateConfig(bad), &mut sink);

    assert_eq!(sink.events.len(), before);
    assert_eq!(app.alarm_temperature(), 28);
    assert_eq!(app.current_config(), SystemConfig::default());
}

#[test]
fn config_update_bounds_history() {
    let (mut app, mut hw, mut sink) = make_app();
    let cfg = SystemConfig {
        max_history_episodes: Some(1),
        ..SystemConfig::default()
    };
    app.handle_command(AppCommand::UpdateConfig(cfg.clone()), &mut sink);
    assert_eq!(app.current_config(), cfg);

    feed(&mut app, &mut hw, &mut sink, &[(30, 0), (20, 1000)]);
    hw.sample(30, 2000);
    let err = app.tick(&mut hw, &mut sink).unwrap_err();
    assert_eq!(err, Error::History(HistoryError::Full { capacity: 1 }));
    assert_eq!(app.state(), AlarmState::Normal);

    // Clearing frees room; the pending trip is recorded on the next tick.
    app.clear_counter_history();
    let states = feed(&mut app, &mut hw, &mut sink, &[(30, 3000)]);
    assert_eq!(states, vec![AlarmState::Alarmed]);
    assert_eq!(app.alarms_counter(), 1);
}

// ── Telemetry ────────────────────────────────────────────────

#[test]
fn telemetry_emitted_once_per_interval() {
    let config = SystemConfig {
        telemetry_interval_secs: 10,
        ..SystemConfig::default()
    };
    let (mut app, mut hw, mut sink) = make_app_with(config);

    let samples: Vec<(Temperature, u64)> = (0..=25).map(|s| (22, s * 1000)).collect();
    feed(&mut app, &mut hw, &mut sink, &samples);

    let telemetry: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Telemetry(t) => Some(*t),
            _ => None,
        })
        .collect();
    assert_eq!(telemetry.len(), 2);
    assert_eq!(telemetry[0].uptime_ms, 10_000);
    assert_eq!(telemetry[1].uptime_ms, 20_000);
    assert_eq!(telemetry[1].temperature, Some(22));
    assert_eq!(telemetry[1].state, AlarmState::Normal);
}
