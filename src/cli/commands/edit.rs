use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditOutcome};
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Amend an existing session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields, upsert } = cmd {
        let assignments = fields.assignments();
        if assignments.is_empty() {
            info("Nothing to change: no field options given.");
        }

        let mut store = Core::open_store(cfg)?;

        match EditLogic::apply(&mut store, *id, &assignments, *upsert)? {
            EditOutcome::Updated(id) => {
                success(format!("Record #{id} updated."));
                audit(&cfg.database, "edit", &format!("#{id}"), "Record replaced");
            }
            EditOutcome::Created(new_id) => {
                success(format!("Record #{id} not found, saved as new record #{new_id}."));
                audit(&cfg.database, "add", &format!("#{new_id}"), "Record created by upsert");
            }
        }
    }

    Ok(())
}
