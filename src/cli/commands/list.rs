use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coerce::parse_flag;
use crate::core::logic::Core;
use crate::core::view::sort_records;
use crate::errors::AppResult;
use crate::models::{Field, Record, SCHEMA};
use crate::ui::messages::info;
use crate::utils::colors::{colorize_flag, colorize_optional, colorize_signed};
use crate::utils::table::{Column, Table};

/// Columns of the default (compact) view.
const COMPACT: [Field; 11] = [
    Field::Date,
    Field::Location,
    Field::Duration,
    Field::DistanceAdded,
    Field::EnergyAdded,
    Field::FullyCharged,
    Field::ChargingFee,
    Field::ParkingFee,
    Field::CostPerEnergy,
    Field::CostPerDistance,
    Field::Remarks,
];

const TEXT_COLUMN_WIDTH: usize = 24;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        sort,
        desc,
        all_columns,
    } = cmd
    {
        let store = Core::open_store(cfg)?;

        if store.is_empty() {
            info("No records yet. Add one with `evlogbook add` or `evlogbook import`.");
            return Ok(());
        }

        let records: Vec<&Record> = match sort {
            Some(field) => sort_records(store.list(), *field, *desc),
            None => store.list().iter().collect(),
        };

        let fields: &[Field] = if *all_columns { &SCHEMA } else { &COMPACT };
        println!("{}", render(&records, fields));
        info(format!("{} record(s)", records.len()));
    }
    Ok(())
}

fn render(records: &[&Record], fields: &[Field]) -> String {
    let mut columns = vec![Column::new("#")];
    columns.extend(fields.iter().map(|f| match f {
        Field::Location | Field::MaintenanceNote | Field::Remarks => {
            Column::new(f.name()).truncated(TEXT_COLUMN_WIDTH)
        }
        _ => Column::new(f.name()),
    }));

    let mut table = Table::new(columns);

    for record in records {
        let mut row = vec![record.id.to_string()];
        row.extend(fields.iter().map(|f| cell(record, *f)));
        table.add_row(row);
    }

    table.render()
}

fn cell(record: &Record, field: Field) -> String {
    let value = record.get(field);
    match field {
        Field::FullyCharged => colorize_flag(value, parse_flag(value)),
        Field::DistanceAdded | Field::CostPerEnergy | Field::CostPerDistance => {
            colorize_optional(&colorize_signed(value))
        }
        _ => colorize_optional(value),
    }
}
