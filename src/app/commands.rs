//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (front-panel
//! keys, serial console) that the [`AppService`](super::service::AppService)
//! interprets between ticks.

use crate::config::SystemConfig;
use crate::sensors::temperature::Temperature;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Change the trip threshold.  No validation; applies next tick.
    SetAlarmTemperature(Temperature),

    /// Change the release threshold.  No validation; applies next tick.
    SetTurnOffAlarmTemperature(Temperature),

    /// Wipe the alarm history and reset the counter.
    ClearHistory,

    /// Emit the full history as an event.
    ReportHistory,

    /// Hot-reload configuration.
    UpdateConfig(SystemConfig),
}
