use chrono::NaiveDate;

/// Formats accepted for the `Date` field, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a record date leniently (`YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
