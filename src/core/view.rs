//! Presentation helpers: ordering for table output.
//! Sorting never touches the store, it only reorders borrowed records.

use crate::core::coerce::{parse_decimal, parse_record_date};
use crate::models::{Field, Record};
use std::cmp::Ordering;

/// Records ordered by `field`; ties keep insertion order.
pub fn sort_records(records: &[Record], field: Field, descending: bool) -> Vec<&Record> {
    let mut view: Vec<&Record> = records.iter().collect();

    view.sort_by(|a, b| {
        let (x, y) = (a.get(field).trim(), b.get(field).trim());

        // empty values always go last, whatever the direction
        match (x.is_empty(), y.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        let ord = compare_values(x, y);
        if descending { ord.reverse() } else { ord }
    });

    view
}

fn compare_values(x: &str, y: &str) -> Ordering {
    if let (Some(a), Some(b)) = (parse_decimal(x), parse_decimal(y)) {
        return a.total_cmp(&b);
    }
    if let (Some(a), Some(b)) = (parse_record_date(x), parse_record_date(y)) {
        return a.cmp(&b);
    }
    x.to_lowercase().cmp(&y.to_lowercase())
}
