//! Fixed-width temperature formatting for the 16×2 character LCD.
//!
//! The HD44780 CGRAM holds two custom glyphs: `\x01` is the degree sign
//! used for measured values and `\x02` the bell-degree sign used for
//! thresholds.  Every value renders in four columns so fields never shift
//! as the reading changes.
//!
//! | Value        | Output         |
//! |--------------|----------------|
//! | `t < -9`     | `-12` + glyph  |
//! | `-9..=-1`    | `-05` + glyph  |
//! | `0..=9`      | `05` + glyph + space |
//! | `t >= 10`    | `28` + glyph + space |

use core::fmt::Write;

use heapless::String;

use crate::alarm::AlarmState;
use crate::sensors::temperature::Temperature;

/// Which glyph follows the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureKind {
    Measured,
    Threshold,
}

impl TemperatureKind {
    fn glyph(self) -> char {
        match self {
            Self::Measured => '\u{1}',
            Self::Threshold => '\u{2}',
        }
    }
}

/// Render `t` as a four-column LCD field.
pub fn format_temperature(t: Temperature, kind: TemperatureKind) -> String<8> {
    let mut out = String::new();
    let glyph = kind.glyph();
    // Capacity 8 always fits "-128" plus glyph and padding.
    let _ = if t < -9 {
        write!(out, "{}{}", t, glyph)
    } else if t < 0 {
        write!(out, "-0{}{}", -t, glyph)
    } else if t < 10 {
        write!(out, "0{}{} ", t, glyph)
    } else {
        write!(out, "{}{} ", t, glyph)
    };
    out
}

/// The two LCD rows: measured value and state on top, thresholds below.
pub fn status_lines(
    current: Temperature,
    alarm: Temperature,
    turn_off: Temperature,
    state: AlarmState,
) -> (String<16>, String<16>) {
    let mut top = String::new();
    let mut bottom = String::new();
    let flag = match state {
        AlarmState::Normal => "OK",
        AlarmState::Alarmed => "ALARM",
    };
    let _ = write!(
        top,
        "T {} {}",
        format_temperature(current, TemperatureKind::Measured),
        flag
    );
    let _ = write!(
        bottom,
        "A {} R {}",
        format_temperature(alarm, TemperatureKind::Threshold),
        format_temperature(turn_off, TemperatureKind::Threshold)
    );
    (top, bottom)
}
