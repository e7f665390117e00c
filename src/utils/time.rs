//! Time utilities: wall-clock times of day and minute formatting.

/// A wall-clock time as typed by the user.
///
/// Components are not range-checked: `25:10` is a valid value and simply
/// counts as 25 hours and 10 minutes past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Format a minute count as `H:MM` (hours are not zero padded).
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}
