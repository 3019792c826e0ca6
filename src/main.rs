//! TempWatch Firmware: Main Entry Point
//!
//! Single cooperative polling loop around the hexagonal core.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter                  LogEventSink           │
//! │  (Sensor+Clock+Indicator)         (EventSink)            │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          AppService (pure logic)               │      │
//! │  │  AlarmStateMachine · AlarmHistoryLog · Blinker │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info, warn};

use esp_idf_hal::delay::FreeRtos;

use tempwatch::adapters::hardware::HardwareAdapter;
use tempwatch::adapters::log_sink::LogEventSink;
use tempwatch::adapters::time::Esp32TimeAdapter;
use tempwatch::app::service::AppService;
use tempwatch::config::SystemConfig;
use tempwatch::drivers::alarm_led::AlarmLed;
use tempwatch::drivers::hw_init;
use tempwatch::error::{Error, HistoryError};
use tempwatch::sensors::temperature::TemperatureSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("TempWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without the ADC there is nothing to monitor; the task
        // watchdog resets the chip after its timeout.
        error!("HAL init failed, halting: {}", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Config (factory defaults; nothing is persisted) ────
    let config = SystemConfig::default();
    config.validate()?;
    let sample_ms = config.sample_interval_ms;

    // ── 4. Adapters + core ────────────────────────────────────
    let mut hw = HardwareAdapter::new(
        TemperatureSensor::new(hw_init::ADC1_CH_TEMP),
        Esp32TimeAdapter::new(),
        AlarmLed::new(tempwatch::ALARM_LED_GPIO),
    );
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(config);
    app.start(&mut sink);

    // ── 5. Polling loop ───────────────────────────────────────
    loop {
        match app.tick(&mut hw, &mut sink) {
            // Sensor faults were already reported through the sink.
            Ok(_) | Err(Error::Sensor(_)) => {}
            Err(Error::History(HistoryError::Full { .. } | HistoryError::AllocationFailed)) => {
                warn!("History exhausted, discarding old episodes");
                app.clear_counter_history();
            }
            Err(e) => warn!("Tick failed: {}", e),
        }
        FreeRtos::delay_ms(sample_ms);
    }
}
