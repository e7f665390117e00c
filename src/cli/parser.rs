use crate::codec::CsvMapping;
use crate::export::ExportFormat;
use crate::models::{Field, RecordId};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for evlogbook
/// CLI logbook for electric-vehicle charging sessions
#[derive(Parser)]
#[command(
    name = "evlogbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple charging logbook for electric vehicles: sessions, costs per kWh/km, CSV import and export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One option per editable field. Derived fields (duration, distance added,
/// unit costs) are always recomputed and cannot be set.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Session date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Charging location
    #[arg(long)]
    pub location: Option<String>,
    /// Starting time (HH:MM)
    #[arg(long = "start")]
    pub starting_time: Option<String>,
    /// Ending time (HH:MM); earlier than start means the session crossed midnight
    #[arg(long = "end")]
    pub ending_time: Option<String>,
    /// Remaining range when plugging in
    #[arg(long = "start-distance", allow_hyphen_values = true)]
    pub starting_distance: Option<String>,
    /// Remaining range when unplugging
    #[arg(long = "end-distance", allow_hyphen_values = true)]
    pub ending_distance: Option<String>,
    /// Charger's claimed power (kW)
    #[arg(long = "power")]
    pub claimed_power: Option<String>,
    /// Charger's claimed current (A)
    #[arg(long = "current")]
    pub claimed_current: Option<String>,
    /// Range gained per hour of charging
    #[arg(long = "rate")]
    pub distance_rate: Option<String>,
    /// Energy added (kWh)
    #[arg(long = "energy")]
    pub energy_added: Option<String>,
    /// Charged to full? (yes/y/true/✓ count as yes)
    #[arg(long = "full")]
    pub fully_charged: Option<String>,
    /// Range shown at full charge
    #[arg(long = "full-distance")]
    pub full_distance: Option<String>,
    /// Charging fee (currency symbols and separators are fine)
    #[arg(long = "charging-fee", allow_hyphen_values = true)]
    pub charging_fee: Option<String>,
    /// Parking fee
    #[arg(long = "parking-fee", allow_hyphen_values = true)]
    pub parking_fee: Option<String>,
    /// Odometer reading
    #[arg(long)]
    pub odometer: Option<String>,
    /// Maintenance note
    #[arg(long = "maintenance")]
    pub maintenance_note: Option<String>,
    /// Free-form remarks
    #[arg(long)]
    pub remarks: Option<String>,
}

impl RecordArgs {
    /// The options actually given on the command line.
    pub fn assignments(&self) -> Vec<(Field, String)> {
        [
            (Field::Date, &self.date),
            (Field::Location, &self.location),
            (Field::StartingTime, &self.starting_time),
            (Field::EndingTime, &self.ending_time),
            (Field::StartingDistance, &self.starting_distance),
            (Field::EndingDistance, &self.ending_distance),
            (Field::ClaimedPower, &self.claimed_power),
            (Field::ClaimedCurrent, &self.claimed_current),
            (Field::DistanceRate, &self.distance_rate),
            (Field::EnergyAdded, &self.energy_added),
            (Field::FullyCharged, &self.fully_charged),
            (Field::FullDistance, &self.full_distance),
            (Field::ChargingFee, &self.charging_fee),
            (Field::ParkingFee, &self.parking_fee),
            (Field::Odometer, &self.odometer),
            (Field::MaintenanceNote, &self.maintenance_note),
            (Field::Remarks, &self.remarks),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|v| (field, v.clone())))
        .collect()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a charging session
    Add {
        #[command(flatten)]
        fields: RecordArgs,
    },

    /// Amend a session: given options replace the stored values
    Edit {
        /// Record id (as shown by `list`)
        id: RecordId,

        #[command(flatten)]
        fields: RecordArgs,

        /// Create a new record when the id does not exist
        #[arg(long)]
        upsert: bool,
    },

    /// Delete a session by id
    Del {
        /// Record id (as shown by `list`)
        id: RecordId,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List sessions as a table
    List {
        /// Sort by this field (e.g. date, energy-added, "Charging-Fee")
        #[arg(long)]
        sort: Option<Field>,

        /// Sort in descending order (with --sort)
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Show every column instead of the compact view
        #[arg(long = "all-columns")]
        all_columns: bool,
    },

    /// Show every field of one session
    Show {
        /// Record id (as shown by `list`)
        id: RecordId,
    },

    /// Total expenditure and days since the last full charge
    Dashboard,

    /// Import sessions from a CSV file
    Import {
        /// CSV file (header row first)
        file: String,

        /// Column mapping: by position (default from config) or by header name
        #[arg(long, value_enum)]
        mapping: Option<CsvMapping>,

        /// Replace every existing record instead of only seeding an empty logbook
        #[arg(long)]
        replace: bool,
    },

    /// Export sessions
    Export {
        /// Export format: csv, sheets (CSV with BOM), json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Preview the derived fields for the given inputs without saving
    Calc {
        #[command(flatten)]
        fields: RecordArgs,
    },
}
