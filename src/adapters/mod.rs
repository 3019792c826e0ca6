//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | SensorSource       | ESP32 ADC1               |
//! |                | ClockSource        | esp_timer + gettimeofday |
//! |                | IndicatorSink      | ESP32 GPIO               |
//! | `log_sink`     | EventSink          | Serial log output        |
//! | `time`         | ClockSource        | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod time;
