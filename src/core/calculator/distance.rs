use crate::core::coerce::{format_decimal, parse_decimal};

pub const DISTANCE_PRECISION: usize = 2;

/// `end - start` to two decimals, or empty unless both parse.
///
/// The result is not clamped: a reading that went backwards is kept as a
/// negative delta so the bad input stays visible.
pub fn compute_distance_added(start_dist: &str, end_dist: &str) -> String {
    match (parse_decimal(start_dist), parse_decimal(end_dist)) {
        (Some(s), Some(e)) => format_decimal(e - s, DISTANCE_PRECISION),
        _ => String::new(),
    }
}
