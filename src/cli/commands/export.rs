use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = Core::open_store(cfg)?;
        let file = expand_tilde(file);

        if let Some(path) = ExportLogic::export(&store, *format, &file.to_string_lossy(), *force)? {
            audit(
                &cfg.database,
                "export",
                &path.to_string_lossy(),
                &format!("{} record(s) as {}", store.len(), format.as_str()),
            );
        }
    }
    Ok(())
}
