use serde::{Deserialize, Serialize};

/// One column of the charging log.
///
/// The declaration order is the canonical schema order: it drives the CSV
/// column order, the positional import mapping and the table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Date,
    Location,
    StartingTime,
    EndingTime,
    Duration,
    StartingDistance,
    EndingDistance,
    DistanceAdded,
    ClaimedPower,
    ClaimedCurrent,
    DistanceRate,
    EnergyAdded,
    FullyCharged,
    FullDistance,
    ChargingFee,
    ParkingFee,
    CostPerEnergy,
    CostPerDistance,
    Odometer,
    MaintenanceNote,
    Remarks,
}

/// Fixed, ordered schema.
pub const SCHEMA: [Field; 21] = [
    Field::Date,
    Field::Location,
    Field::StartingTime,
    Field::EndingTime,
    Field::Duration,
    Field::StartingDistance,
    Field::EndingDistance,
    Field::DistanceAdded,
    Field::ClaimedPower,
    Field::ClaimedCurrent,
    Field::DistanceRate,
    Field::EnergyAdded,
    Field::FullyCharged,
    Field::FullDistance,
    Field::ChargingFee,
    Field::ParkingFee,
    Field::CostPerEnergy,
    Field::CostPerDistance,
    Field::Odometer,
    Field::MaintenanceNote,
    Field::Remarks,
];

/// Fields that are always recomputed and never edited directly.
pub const DERIVED_FIELDS: [Field; 4] = [
    Field::Duration,
    Field::DistanceAdded,
    Field::CostPerEnergy,
    Field::CostPerDistance,
];

impl Field {
    /// Canonical column name (CSV header, snapshot key).
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Location => "Location",
            Field::StartingTime => "Starting Time",
            Field::EndingTime => "Ending Time",
            Field::Duration => "Duration",
            Field::StartingDistance => "Starting-Distance",
            Field::EndingDistance => "Ending-Distance",
            Field::DistanceAdded => "Distance-Added",
            Field::ClaimedPower => "Claimed-Power",
            Field::ClaimedCurrent => "Claimed-Current",
            Field::DistanceRate => "Distance-Rate",
            Field::EnergyAdded => "Energy-Added",
            Field::FullyCharged => "Fully-Charged",
            Field::FullDistance => "Full-Distance",
            Field::ChargingFee => "Charging-Fee",
            Field::ParkingFee => "Parking-Fee",
            Field::CostPerEnergy => "Cost-Per-Energy",
            Field::CostPerDistance => "Cost-Per-Distance",
            Field::Odometer => "Odometer",
            Field::MaintenanceNote => "Maintenance-Note",
            Field::Remarks => "Remarks",
        }
    }

    /// Header labels written by older versions of the logbook.
    fn legacy_name(&self) -> Option<&'static str> {
        match self {
            Field::Duration => Some("Duratin"),
            Field::StartingDistance => Some("Starting km"),
            Field::EndingDistance => Some("Ending km"),
            Field::DistanceAdded => Some("km added"),
            Field::ClaimedPower => Some("ClaimedkW"),
            Field::ClaimedCurrent => Some("Claimed Amp"),
            Field::DistanceRate => Some("km/hr"),
            Field::EnergyAdded => Some("kWh added"),
            Field::FullyCharged => Some("Fully Charged"),
            Field::FullDistance => Some("Full km"),
            Field::ChargingFee => Some("Charging Fee"),
            Field::ParkingFee => Some("Parking Fee"),
            Field::CostPerEnergy => Some("$/kW"),
            Field::CostPerDistance => Some("$/km"),
            Field::MaintenanceNote => Some("Maintenance"),
            _ => None,
        }
    }

    /// Resolve a CSV header label (canonical or legacy, case-insensitive).
    pub fn from_header(label: &str) -> Option<Self> {
        let wanted = label.trim();
        SCHEMA.iter().copied().find(|f| {
            f.name().eq_ignore_ascii_case(wanted)
                || f.legacy_name().is_some_and(|l| l.eq_ignore_ascii_case(wanted))
        })
    }

    pub fn is_derived(&self) -> bool {
        DERIVED_FIELDS.contains(self)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = crate::errors::AppError;

    /// Accepts header labels as well as kebab/snake spellings from the CLI
    /// (`energy-added`, `charging_fee`, `starting-time`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(f) = Field::from_header(s) {
            return Ok(f);
        }

        let normalized = |v: &str| {
            v.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = normalized(s);

        SCHEMA
            .iter()
            .copied()
            .find(|f| normalized(f.name()) == wanted)
            .ok_or_else(|| crate::errors::AppError::InvalidField(s.to_string()))
    }
}
