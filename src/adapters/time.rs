//! ESP32 time adapter.
//!
//! Implements [`ClockSource`] for the TempWatch controller.
//!
//! - **`target_os = "espidf"`**: monotonic millis from `esp_timer_get_time()`,
//!   wall clock from `gettimeofday()` (set by SNTP or the console).
//! - **`not(target_os = "espidf")`**: `std::time::Instant` and
//!   `SystemTime` for host-side testing and simulation.

use crate::app::ports::ClockSource;
use crate::calendar::DateTime;

/// Time adapter for the ESP32-S3 platform.
pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000
    }

    /// Milliseconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Seconds since the Unix epoch.  0 if the wall clock was never set.
    #[cfg(target_os = "espidf")]
    pub fn unix_secs(&self) -> u64 {
        let mut tv = esp_idf_svc::sys::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        if unsafe { esp_idf_svc::sys::gettimeofday(&mut tv, core::ptr::null_mut()) } != 0 {
            return 0;
        }
        tv.tv_sec.max(0) as u64
    }

    /// Seconds since the Unix epoch.
    #[cfg(not(target_os = "espidf"))]
    pub fn unix_secs(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

impl ClockSource for Esp32TimeAdapter {
    fn now_millis(&self) -> u64 {
        self.uptime_ms()
    }

    fn now_datetime(&self) -> DateTime {
        DateTime::from_unix(self.unix_secs())
    }
}
