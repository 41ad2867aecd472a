//! Clock-time arithmetic.
//!
//! Times are `HH:MM` strings on a 24-hour clock. Parsing never fails:
//! anything malformed or out of range counts as midnight, so durations
//! computed from bad input collapse to zero instead of erroring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A duration split into whole hours and remaining minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    /// Whole hours.
    pub hours: u32,
    /// Remaining minutes (0-59).
    pub minutes: u32,
}

impl HoursMinutes {
    /// Converts back to a total number of minutes.
    pub fn to_minutes(self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// Parses an `HH:MM` string into minutes since midnight.
///
/// Returns 0 when the text is empty, has no `:`, either part is not a
/// non-negative integer, the hour is outside 0..=23 or the minute is
/// outside 0..=59.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("09:30"), 570);
/// assert_eq!(parse_clock_time("9:05"), 545);
/// assert_eq!(parse_clock_time("25:70"), 0);
/// assert_eq!(parse_clock_time("noon"), 0);
/// ```
pub fn parse_clock_time(text: &str) -> u32 {
    let Some((hours, minutes)) = text.trim().split_once(':') else {
        return 0;
    };

    let (Ok(hours), Ok(minutes)) = (hours.parse::<u32>(), minutes.parse::<u32>()) else {
        return 0;
    };

    if hours > 23 || minutes > 59 {
        return 0;
    }

    hours * 60 + minutes
}

/// Splits a minute count into hours and minutes.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::format_minutes;
///
/// let hm = format_minutes(135);
/// assert_eq!((hm.hours, hm.minutes), (2, 15));
/// assert_eq!(hm.to_string(), "2:15");
/// ```
pub fn format_minutes(total_minutes: u32) -> HoursMinutes {
    HoursMinutes {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
    }
}

/// Formats minutes since midnight back into `HH:MM`.
pub fn to_clock_time(minutes_since_midnight: u32) -> String {
    let hm = format_minutes(minutes_since_midnight);
    format!("{:02}:{:02}", hm.hours, hm.minutes)
}

/// Worked minutes between two clock times, net of a break.
///
/// Never negative: an end before the start, or a break longer than the
/// span, yields 0.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::worked_minutes;
///
/// assert_eq!(worked_minutes("09:00", "12:00", 60), 120);
/// assert_eq!(worked_minutes("12:00", "09:00", 0), 0);
/// assert_eq!(worked_minutes("09:00", "10:00", 120), 0);
/// ```
pub fn worked_minutes(start_time: &str, end_time: &str, break_minutes: u32) -> u32 {
    parse_clock_time(end_time)
        .saturating_sub(parse_clock_time(start_time))
        .saturating_sub(break_minutes)
}
