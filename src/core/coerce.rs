//! Field coercion: turn freeform user text into typed values and back.
//!
//! Nothing in here fails. Every function returns either a best-effort value
//! or a designated "no value" outcome, so a record with partially garbled
//! input can still be saved.

use crate::utils::time::TimeOfDay;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Strings recognised as a true flag, compared after trim + lowercase.
///
/// Adding a synonym here changes how existing data is read.
pub const TRUTHY_FLAGS: [&str; 4] = ["yes", "y", "true", "✓"];

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("static money pattern"));

/// Parse a money amount, ignoring currency symbols and separators.
///
/// `"$1,234.56"` → `1234.56`; empty or unparseable input → `0.0`.
pub fn parse_money(raw: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub fn parse_flag(raw: &str) -> bool {
    let v = raw.trim().to_lowercase();
    TRUTHY_FLAGS.contains(&v.as_str())
}

/// Parse `H:MM` / `HH:MM`. Exactly two numeric components are required.
pub fn parse_time_of_day(raw: &str) -> Option<TimeOfDay> {
    let (h, m) = raw.trim().split_once(':')?;
    let hour = parse_component(h)?;
    let minute = parse_component(m)?;
    Some(TimeOfDay::new(hour, minute))
}

fn parse_component(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Standard decimal parse. `None` is distinct from `Some(0.0)`: callers must
/// branch on validity before dividing by the result.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    crate::utils::date::parse_date(raw)
}

/// Fixed-point display of a number. Negative zero is printed as zero.
pub fn format_decimal(value: f64, places: usize) -> String {
    let out = format!("{:.*}", places, value);
    if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
        out[1..].to_string()
    } else {
        out
    }
}

pub fn format_money(value: f64, symbol: &str) -> String {
    let body = format_decimal(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

pub fn format_flag(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
