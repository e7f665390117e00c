use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coerce::{format_flag, parse_flag};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::{Field, SCHEMA};
use crate::ui::messages::{detail, header};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = Core::open_store(cfg)?;
        let record = store
            .get(*id)
            .ok_or_else(|| AppError::RecordNotFound(id.value()))?;

        header(format!("Record #{id}"));

        for field in SCHEMA {
            let raw = record.get(field);
            let value = match field {
                _ if raw.trim().is_empty() => "--".to_string(),
                Field::FullyCharged => format!("{raw} ({})", format_flag(parse_flag(raw))),
                _ => raw.to_string(),
            };

            if field.is_derived() {
                detail(format!("{field} (derived)"), value);
            } else {
                detail(field, value);
            }
        }
        println!();
    }

    Ok(())
}
