use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine and
/// records every applied step in the internal log.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let applied = run_pending_migrations(conn)?;

    for step in applied {
        if let Err(e) = ttlog(conn, "migration_applied", step, "Schema step applied") {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    Ok(())
}
