//! Wall-clock times for course sections.
//!
//! Catalog text gives meeting times as 12-hour readings like "2:30 PM".
//! This module parses those into a fixed time-of-day and exposes the two
//! percentage scales the rest of the crate works in: a raw fraction of
//! the 24-hour day (used for scoring) and a position within a bounded
//! display window (used for conflict comparison).

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid 12-hour time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct InvalidTime {
    reason: &'static str,
}

impl InvalidTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Error returned when constructing an invalid display window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day window: {reason}")]
pub struct InvalidWindow {
    reason: &'static str,
}

/// The bounded slice of the day used for conflict comparison.
///
/// Times are remapped from `[start_hours, end_hours)` to `[0, 100)` before
/// intervals are compared, so two slots measured against the same window
/// are ordered consistently. The default window is 7:00-22:00, the range a
/// scheduled class plausibly falls in.
///
/// # Examples
///
/// ```
/// use schedule_core::domain::DayWindow;
///
/// let window = DayWindow::default();
/// assert_eq!(window.start_hours(), 7.0);
/// assert_eq!(window.end_hours(), 22.0);
///
/// // Inverted or out-of-range bounds are rejected
/// assert!(DayWindow::new(22.0, 7.0).is_err());
/// assert!(DayWindow::new(7.0, 24.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayWindow {
    start_hours: f64,
    end_hours: f64,
}

impl DayWindow {
    /// Create a window from fractional hour bounds.
    ///
    /// Both bounds must lie in `[0, 24)` and `start < end`.
    pub fn new(start_hours: f64, end_hours: f64) -> Result<Self, InvalidWindow> {
        if !(0.0..24.0).contains(&start_hours) || !(0.0..24.0).contains(&end_hours) {
            return Err(InvalidWindow {
                reason: "bounds must lie in [0, 24)",
            });
        }
        if start_hours >= end_hours {
            return Err(InvalidWindow {
                reason: "start must be before end",
            });
        }
        Ok(Self {
            start_hours,
            end_hours,
        })
    }

    /// Lower bound of the window, in fractional hours.
    pub fn start_hours(&self) -> f64 {
        self.start_hours
    }

    /// Upper bound of the window, in fractional hours.
    pub fn end_hours(&self) -> f64 {
        self.end_hours
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self {
            start_hours: 7.0,
            end_hours: 22.0,
        }
    }
}

/// Linearly remap `value` from `[low1, high1]` to `[low2, high2]`.
///
/// Values outside the source range extrapolate; there is no clamping.
fn remap(value: f64, low1: f64, high1: f64, low2: f64, high2: f64) -> f64 {
    low2 + ((high2 - low2) * (value - low1)) / (high1 - low1)
}

/// A wall-clock time-of-day paired with the window it is compared in.
///
/// # Examples
///
/// ```
/// use schedule_core::domain::{ClockTime, DayWindow};
///
/// let window = DayWindow::default();
/// let time = ClockTime::parse_12h("2:30 PM", window).unwrap();
/// assert_eq!(time.hour(), 14);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.to_string(), "2:30 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockTime {
    time: NaiveTime,
    window: DayWindow,
}

impl ClockTime {
    /// Create a ClockTime directly from a time-of-day and a window.
    pub fn new(time: NaiveTime, window: DayWindow) -> Self {
        Self { time, window }
    }

    /// Parse a 12-hour clock reading like "9:00 AM" or "12:15 PM".
    ///
    /// The hour must be 1-12, the minute exactly two digits 00-59, and the
    /// meridiem "AM" or "PM". "12:00 AM" is midnight; "12:00 PM" is noon.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::domain::{ClockTime, DayWindow};
    ///
    /// let w = DayWindow::default();
    /// assert_eq!(ClockTime::parse_12h("12:00 AM", w).unwrap().hour(), 0);
    /// assert_eq!(ClockTime::parse_12h("12:00 PM", w).unwrap().hour(), 12);
    /// assert_eq!(ClockTime::parse_12h("11:59 PM", w).unwrap().hour(), 23);
    ///
    /// assert!(ClockTime::parse_12h("13:00 PM", w).is_err());
    /// assert!(ClockTime::parse_12h("0:30 AM", w).is_err());
    /// assert!(ClockTime::parse_12h("9:5 AM", w).is_err());
    /// ```
    pub fn parse_12h(s: &str, window: DayWindow) -> Result<Self, InvalidTime> {
        let (hour_part, rest) = s
            .split_once(':')
            .ok_or_else(|| InvalidTime::new("expected H:MM AM/PM"))?;
        let (minute_part, meridiem) = rest
            .split_once(' ')
            .ok_or_else(|| InvalidTime::new("expected meridiem after minutes"))?;

        let hour = parse_digits(hour_part, 1, 2)
            .ok_or_else(|| InvalidTime::new("invalid hour digits"))?;
        if !(1..=12).contains(&hour) {
            return Err(InvalidTime::new("hour must be 1-12"));
        }

        let minute = parse_digits(minute_part, 2, 2)
            .ok_or_else(|| InvalidTime::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(InvalidTime::new("minute must be 00-59"));
        }

        let hour24 = match meridiem {
            "AM" => hour % 12,
            "PM" => hour % 12 + 12,
            _ => return Err(InvalidTime::new("meridiem must be AM or PM")),
        };

        let time = NaiveTime::from_hms_opt(hour24, minute, 0)
            .ok_or_else(|| InvalidTime::new("invalid time"))?;

        Ok(Self { time, window })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the underlying time-of-day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the window this time is compared in.
    pub fn window(&self) -> DayWindow {
        self.window
    }

    /// The time-of-day as fractional hours, e.g. 14.5 for 2:30 PM.
    fn value_hours(&self) -> f64 {
        f64::from(self.hour()) + f64::from(self.minute()) / 60.0
    }

    /// Fraction of the full 24-hour day, in `[0, 1)`.
    ///
    /// This is the scoring scale: it is fixed at 0-24 regardless of the
    /// window, so "centered in the day" always means noon.
    pub fn raw_percent(&self) -> f64 {
        remap(self.value_hours(), 0.0, 24.0, 0.0, 1.0)
    }

    /// Position within the display window, mapped to `[0, 100)`.
    ///
    /// This is the conflict-comparison scale. Times outside the window
    /// extrapolate below 0 or above 100 rather than clamping, preserving
    /// their ordering.
    pub fn window_percent(&self) -> f64 {
        remap(
            self.value_hours(),
            self.window.start_hours,
            self.window.end_hours,
            0.0,
            100.0,
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%-I:%M %p"))
    }
}

/// Parse a run of ASCII digits with a length between `min_len` and `max_len`.
fn parse_digits(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len {
        return None;
    }
    let mut value = 0u32;
    for b in s.bytes() {
        let digit = (b as char).to_digit(10)?;
        value = value * 10 + digit;
    }
    Some(value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_12h()(hour in 1u32..=12, minute in 0u32..60, pm in any::<bool>()) -> String {
            format!("{}:{:02} {}", hour, minute, if pm { "PM" } else { "AM" })
        }
    }

    proptest! {
        /// Any valid 12-hour string parses successfully
        #[test]
        fn valid_always_parses(s in valid_12h()) {
            prop_assert!(ClockTime::parse_12h(&s, DayWindow::default()).is_ok());
        }

        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(s in valid_12h()) {
            let t = ClockTime::parse_12h(&s, DayWindow::default()).unwrap();
            prop_assert_eq!(t.to_string(), s);
        }

        /// raw_percent always lands in [0, 1)
        #[test]
        fn raw_percent_in_unit_interval(s in valid_12h()) {
            let t = ClockTime::parse_12h(&s, DayWindow::default()).unwrap();
            prop_assert!((0.0..1.0).contains(&t.raw_percent()));
        }

        /// window_percent preserves the ordering of times under a shared window
        #[test]
        fn window_percent_order_preserving(a in valid_12h(), b in valid_12h()) {
            let w = DayWindow::default();
            let ta = ClockTime::parse_12h(&a, w).unwrap();
            let tb = ClockTime::parse_12h(&b, w).unwrap();
            if ta.time() < tb.time() {
                prop_assert!(ta.window_percent() < tb.window_percent());
            }
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 13u32..100, minute in 0u32..60) {
            let s = format!("{}:{:02} AM", hour, minute);
            prop_assert!(ClockTime::parse_12h(&s, DayWindow::default()).is_err());
        }

        /// Invalid minute is rejected
        #[test]
        fn invalid_minute_rejected(hour in 1u32..=12, minute in 60u32..100) {
            let s = format!("{}:{:02} AM", hour, minute);
            prop_assert!(ClockTime::parse_12h(&s, DayWindow::default()).is_err());
        }
    }
}
