use crate::core::coerce::{parse_flag, parse_money, parse_record_date};
use crate::models::dashboard::DashboardSummary;
use crate::models::{Field, Record};
use chrono::NaiveDate;

/// Total expenditure and days since the last full charge, as of `today`.
pub fn summarize(records: &[Record], today: NaiveDate) -> DashboardSummary {
    let total_expenditure = records
        .iter()
        .map(|r| parse_money(r.get(Field::ChargingFee)) + parse_money(r.get(Field::ParkingFee)))
        .sum();

    let last_full_charge = records
        .iter()
        .filter(|r| parse_flag(r.get(Field::FullyCharged)))
        .filter_map(|r| parse_record_date(r.get(Field::Date)))
        .max();

    DashboardSummary {
        total_expenditure,
        last_full_charge,
        days_since_full_charge: last_full_charge.map(|d| (today - d).num_days()),
    }
}
