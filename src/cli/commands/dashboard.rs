use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coerce::format_money;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{detail, header};
use crate::utils::date::format_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard = cmd {
        let store = Core::open_store(cfg)?;
        let summary = Core::dashboard(&store);

        header("Dashboard");
        detail("Records", store.len());
        detail(
            "Total Expenditures",
            format_money(summary.total_expenditure, &cfg.currency_symbol),
        );

        let days = match (summary.days_since_full_charge, summary.last_full_charge) {
            (Some(days), Some(on)) => format!("{days} day(s) (last on {})", format_date(on)),
            _ => "N/A".to_string(),
        };
        detail("No. of Days of Last Fully Charged", days);
        println!();
    }

    Ok(())
}
