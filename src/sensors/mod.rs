//! Sensor drivers.
//!
//! Only the temperature probe today; each driver implements
//! [`SensorSource`](crate::app::ports::SensorSource) and returns raw codes,
//! leaving conversion to the application service.

pub mod temperature;
