use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::recompute_derived;
use crate::errors::AppResult;
use crate::models::{ChargeFields, DERIVED_FIELDS};
use crate::ui::messages::{detail, header};

/// Print the derived fields for the given inputs; nothing is saved.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { fields } = cmd {
        let mut record = ChargeFields::default();
        for (field, value) in fields.assignments() {
            record.set(field, value);
        }

        recompute_derived(&mut record);

        header("Derived fields");
        for field in DERIVED_FIELDS {
            let value = record.get(field);
            detail(field, if value.is_empty() { "--" } else { value });
        }
        println!();
    }

    Ok(())
}
