//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService / AlarmStateMachine (domain)
//! ```
//!
//! Driven adapters (ADC, clock, LED, event sinks) implement these traits.
//! The domain consumes them via generics, so the alarm logic never touches
//! hardware directly and runs unchanged against mocks on the host.
//!
//! All ports are synchronous: the polling loop calls them inline and
//! nothing here may suspend.

use crate::calendar::DateTime;
use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick for a raw sample.
pub trait SensorSource {
    /// Blocking conversion, bounded by the hardware timeout.
    fn read(&mut self) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Time source for episode timestamps, durations and blink timing.
pub trait ClockSource {
    /// Monotonic milliseconds since boot.
    fn now_millis(&self) -> u64;

    /// Current wall-clock date and time.
    fn now_datetime(&self) -> DateTime;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the binary alarm indicator.
pub trait IndicatorSink {
    fn set(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
