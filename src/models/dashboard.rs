use chrono::NaiveDate;

/// The two statistics shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    /// Sum of charging and parking fees over all records.
    pub total_expenditure: f64,
    /// Date of the most recent session flagged as a full charge.
    pub last_full_charge: Option<NaiveDate>,
    /// Whole days between `last_full_charge` and today.
    pub days_since_full_charge: Option<i64>,
}
