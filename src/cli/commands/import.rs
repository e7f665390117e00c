use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{ImportLogic, ImportOutcome};
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        mapping,
        replace,
    } = cmd
    {
        let path = expand_tilde(file);
        let mapping = mapping.unwrap_or(cfg.csv_mapping);
        let mut store = Core::open_store(cfg)?;

        match ImportLogic::apply(&mut store, &path, mapping, *replace)? {
            ImportOutcome::Seeded(n) => {
                success(format!("Imported {n} record(s) from {}.", path.display()));
                audit(
                    &cfg.database,
                    "import",
                    &path.to_string_lossy(),
                    &format!("{n} record(s), {} mapping", mapping.as_str()),
                );
            }
            ImportOutcome::Replaced(n) => {
                success(format!(
                    "Logbook replaced with {n} record(s) from {}.",
                    path.display()
                ));
                audit(
                    &cfg.database,
                    "import",
                    &path.to_string_lossy(),
                    &format!("replace: {n} record(s), {} mapping", mapping.as_str()),
                );
            }
            ImportOutcome::AlreadyPopulated => {
                warning(format!(
                    "The logbook already has {} record(s): nothing imported. Use --replace to overwrite them.",
                    store.len()
                ));
            }
        }
    }

    Ok(())
}
