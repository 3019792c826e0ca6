//! TempWatch firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod alarm;
pub mod app;
pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod sensors;

mod pins;

// Hardware-facing modules carry host simulation twins so the crate builds
// and tests off-target.
pub mod adapters;
pub mod drivers;

pub use pins::ALARM_LED_GPIO;
