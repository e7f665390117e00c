use super::field::{Field, SCHEMA};
use serde::{Deserialize, Serialize};

/// Stable record identifier, independent of the record's position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| crate::errors::AppError::InvalidId(s.to_string()))
    }
}

/// The field values of one charging session, stored as display strings.
///
/// Empty string means "no value". Serde keys are the canonical column names;
/// unknown keys are ignored and missing keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeFields {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Starting Time")]
    pub starting_time: String,
    #[serde(rename = "Ending Time")]
    pub ending_time: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Starting-Distance")]
    pub starting_distance: String,
    #[serde(rename = "Ending-Distance")]
    pub ending_distance: String,
    #[serde(rename = "Distance-Added")]
    pub distance_added: String,
    #[serde(rename = "Claimed-Power")]
    pub claimed_power: String,
    #[serde(rename = "Claimed-Current")]
    pub claimed_current: String,
    #[serde(rename = "Distance-Rate")]
    pub distance_rate: String,
    #[serde(rename = "Energy-Added")]
    pub energy_added: String,
    #[serde(rename = "Fully-Charged")]
    pub fully_charged: String,
    #[serde(rename = "Full-Distance")]
    pub full_distance: String,
    #[serde(rename = "Charging-Fee")]
    pub charging_fee: String,
    #[serde(rename = "Parking-Fee")]
    pub parking_fee: String,
    #[serde(rename = "Cost-Per-Energy")]
    pub cost_per_energy: String,
    #[serde(rename = "Cost-Per-Distance")]
    pub cost_per_distance: String,
    #[serde(rename = "Odometer")]
    pub odometer: String,
    #[serde(rename = "Maintenance-Note")]
    pub maintenance_note: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
}

impl ChargeFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Location => &self.location,
            Field::StartingTime => &self.starting_time,
            Field::EndingTime => &self.ending_time,
            Field::Duration => &self.duration,
            Field::StartingDistance => &self.starting_distance,
            Field::EndingDistance => &self.ending_distance,
            Field::DistanceAdded => &self.distance_added,
            Field::ClaimedPower => &self.claimed_power,
            Field::ClaimedCurrent => &self.claimed_current,
            Field::DistanceRate => &self.distance_rate,
            Field::EnergyAdded => &self.energy_added,
            Field::FullyCharged => &self.fully_charged,
            Field::FullDistance => &self.full_distance,
            Field::ChargingFee => &self.charging_fee,
            Field::ParkingFee => &self.parking_fee,
            Field::CostPerEnergy => &self.cost_per_energy,
            Field::CostPerDistance => &self.cost_per_distance,
            Field::Odometer => &self.odometer,
            Field::MaintenanceNote => &self.maintenance_note,
            Field::Remarks => &self.remarks,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Date => &mut self.date,
            Field::Location => &mut self.location,
            Field::StartingTime => &mut self.starting_time,
            Field::EndingTime => &mut self.ending_time,
            Field::Duration => &mut self.duration,
            Field::StartingDistance => &mut self.starting_distance,
            Field::EndingDistance => &mut self.ending_distance,
            Field::DistanceAdded => &mut self.distance_added,
            Field::ClaimedPower => &mut self.claimed_power,
            Field::ClaimedCurrent => &mut self.claimed_current,
            Field::DistanceRate => &mut self.distance_rate,
            Field::EnergyAdded => &mut self.energy_added,
            Field::FullyCharged => &mut self.fully_charged,
            Field::FullDistance => &mut self.full_distance,
            Field::ChargingFee => &mut self.charging_fee,
            Field::ParkingFee => &mut self.parking_fee,
            Field::CostPerEnergy => &mut self.cost_per_energy,
            Field::CostPerDistance => &mut self.cost_per_distance,
            Field::Odometer => &mut self.odometer,
            Field::MaintenanceNote => &mut self.maintenance_note,
            Field::Remarks => &mut self.remarks,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder-style setter, handy for tests and imports.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Values in schema order.
    pub fn values(&self) -> Vec<&str> {
        SCHEMA.iter().map(|f| self.get(*f)).collect()
    }

    /// Build from values listed in schema order; missing trailing values are
    /// empty, extra values are dropped.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for (field, value) in SCHEMA.iter().zip(values) {
            out.set(*field, value);
        }
        out
    }
}

/// A stored record: identifier plus field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: ChargeFields,
}

impl Record {
    pub fn new(id: RecordId, fields: ChargeFields) -> Self {
        Self { id, fields }
    }

    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }
}
