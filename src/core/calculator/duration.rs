use crate::core::coerce::parse_time_of_day;
use crate::utils::time::{MINUTES_PER_DAY, format_minutes};

/// Minutes between two wall-clock times, wrapping past midnight.
///
/// Whole days are added to `end` until it is no longer before `start`, so a
/// start typed past `24:00` still gives a span in `0..24h`. Equal times are a
/// zero-length session, never a 24h one.
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    let start = parse_time_of_day(start)?.minutes_since_midnight();
    let end = parse_time_of_day(end)?.minutes_since_midnight();

    if end < start {
        let behind = start - end;
        let days = (behind + MINUTES_PER_DAY - 1).div_euclid(MINUTES_PER_DAY);
        return Some(end + days * MINUTES_PER_DAY - start);
    }

    Some(end - start)
}

/// `H:MM` span between `start` and `end`, or empty when either is invalid.
pub fn compute_duration(start: &str, end: &str) -> String {
    duration_minutes(start, end)
        .map(format_minutes)
        .unwrap_or_default()
}
