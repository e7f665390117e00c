//! SQLite-backed snapshot storage.
//!
//! The whole record list is kept as one JSON payload per storage key, so a
//! layout change is handled by switching to a new key rather than by
//! rewriting rows in place.

use crate::core::persist::{SnapshotStore, decode_snapshot, encode_snapshot};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteSnapshotStore {
    pool: DbPool,
    key: String,
}

impl SqliteSnapshotStore {
    /// Open (and migrate) the database at `path`, using snapshot `key`.
    pub fn open(path: &str, key: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool,
            key: key.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a snapshot is saved under the active key. The payload is not decoded.
    pub fn exists(&self) -> AppResult<bool> {
        let found: Option<i64> = self
            .pool
            .conn
            .query_row(
                "SELECT 1 FROM snapshots WHERE key = ?1",
                [&self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Storage keys present in the database other than the active one.
    pub fn other_keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM snapshots WHERE key <> ?1 ORDER BY key ASC")?;

        let rows = stmt.query_map([&self.key], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self) -> AppResult<Option<Vec<Record>>> {
        let payload: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT payload FROM snapshots WHERE key = ?1",
                [&self.key],
                |row| row.get(0),
            )
            .optional()?;

        payload
            .map(|p| {
                decode_snapshot(&p).map_err(|e| {
                    AppError::Persistence(format!("snapshot '{}' is unreadable: {e}", self.key))
                })
            })
            .transpose()
    }

    fn save(&mut self, records: &[Record]) -> AppResult<()> {
        let payload = encode_snapshot(records)?;
        let now = Local::now().to_rfc3339();

        self.pool.conn.execute(
            "INSERT INTO snapshots (key, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload,
                                            updated_at = excluded.updated_at",
            params![self.key, payload, now],
        )?;

        Ok(())
    }
}
