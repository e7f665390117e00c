use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut store = Core::open_store(cfg)?;

        let Some(record) = store.get(*id) else {
            return Err(AppError::RecordNotFound(id.value()));
        };

        if !force {
            let prompt = format!(
                "Delete record #{} ({} {})? This action is irreversible.",
                id, record.fields.date, record.fields.location
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(&mut store, *id)?;
        success(format!("Record #{id} has been deleted."));
        audit(&cfg.database, "del", &format!("#{id}"), "Record removed");
    }

    Ok(())
}
