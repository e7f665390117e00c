use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `snapshots` table exists.
fn snapshots_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='snapshots'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `snapshots` table: one JSON payload per storage key.
fn create_snapshots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS snapshots (
            key         TEXT PRIMARY KEY,
            payload     TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Bring the database schema up to date.
///
/// Returns the names of the steps that were actually applied, so callers can
/// report or audit them.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut applied = Vec::new();

    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Snapshot table
    if !snapshots_table_exists(conn)? {
        create_snapshots_table(conn)?;
        success("Created snapshots table.");
        applied.push("create_snapshots");
    }

    Ok(applied)
}
