use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::{ChargeFields, Field};
use crate::ui::messages::success;
use crate::utils::date;

/// Add a charging session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let mut record = ChargeFields::default();
        for (field, value) in fields.assignments() {
            record.set(field, value);
        }

        // a session without a date defaults to today
        if record.date.trim().is_empty() {
            record.set(Field::Date, date::format_date(date::today()));
        }

        let mut store = Core::open_store(cfg)?;
        let id = AddLogic::apply(&mut store, record);

        let saved = store.get(id).map(|r| r.get(Field::Date)).unwrap_or_default();
        success(format!("Record #{id} saved ({saved})."));
        audit(&cfg.database, "add", &format!("#{id}"), "Record created");
    }

    Ok(())
}
