//! Indicator drivers and hardware initialisation.

pub mod alarm_led;
pub mod hw_init;
