//! Alarm indicator LED drivers.
//!
//! [`AlarmLed`] drives the on-board LED through `hw_init` GPIO writes.
//! [`PinIndicator`] adapts any `embedded-hal` output pin, for boards where
//! the LED hangs off an expander or a HAL-owned pin.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `gpio_set_level` on the pin configured by hw_init.
//! On host/test: the level is kept in the hw_init simulation bitmap.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::IndicatorSink;
use crate::drivers::hw_init;

pub struct AlarmLed {
    gpio: i32,
    on: bool,
}

impl AlarmLed {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl IndicatorSink for AlarmLed {
    fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }
}

/// Indicator on a generic HAL output pin.  Pin errors are logged and the
/// remembered level is left unchanged.
pub struct PinIndicator<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> PinIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> IndicatorSink for PinIndicator<P> {
    fn set(&mut self, on: bool) {
        let res = if on { self.pin.set_high() } else { self.pin.set_low() };
        match res {
            Ok(()) => self.on = on,
            Err(e) => warn!("Indicator pin write failed: {:?}", e),
        }
    }
}
