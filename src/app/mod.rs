//! Application core: pure domain logic, zero I/O.
//!
//! Wraps the alarm state machine with sensor conversion, event emission
//! and command handling.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
