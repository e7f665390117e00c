//! In-memory record store with best-effort persistence.

use crate::codec::{CsvMapping, parse_document};
use crate::core::persist::{MemorySnapshotStore, SnapshotStore};
use crate::models::{ChargeFields, Record, RecordId};
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Result of an operation addressed by record id.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Applied,
    NotFound,
}

impl StoreOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, StoreOutcome::Applied)
    }
}

/// Result of a seed attempt.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and received this many rows.
    Seeded(usize),
    /// The store already had records; nothing was read or inserted.
    AlreadyPopulated,
    /// The seed source could not be read.
    SourceUnavailable,
}

/// Ordered list of records plus the identifier counter.
///
/// Every mutation is saved through the [`SnapshotStore`] right away. A failed
/// save is reported and remembered, but the in-memory change stands.
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
    persistence: Box<dyn SnapshotStore>,
    last_persist_error: Option<String>,
    load_error: Option<String>,
}

impl RecordStore {
    /// Load the saved snapshot (if any) and resume the id sequence after it.
    pub fn open(persistence: Box<dyn SnapshotStore>) -> Self {
        let mut load_error = None;
        let records = match persistence.load() {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(e) => {
                warning(format!("Saved records could not be read, starting empty: {e}"));
                load_error = Some(e.to_string());
                Vec::new()
            }
        };

        let next_id = records.iter().map(|r| r.id.value()).max().map_or(1, |m| m + 1);

        Self {
            records,
            next_id,
            persistence,
            last_persist_error: None,
            load_error,
        }
    }

    pub fn in_memory() -> Self {
        Self::open(Box::new(MemorySnapshotStore::new()))
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Error message of the last failed save, cleared by the next good one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Why the saved snapshot could not be read at open, if it could not.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Append a new record and return its identifier.
    pub fn create(&mut self, fields: ChargeFields) -> RecordId {
        let id = self.allocate_id();
        self.records.push(Record::new(id, fields));
        self.persist();
        id
    }

    /// Replace every field of the record `id`, keeping its position.
    pub fn update(&mut self, id: RecordId, fields: ChargeFields) -> StoreOutcome {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return StoreOutcome::NotFound;
        };

        record.fields = fields;
        self.persist();
        StoreOutcome::Applied
    }

    pub fn remove(&mut self, id: RecordId) -> StoreOutcome {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return StoreOutcome::NotFound;
        };

        self.records.remove(pos);
        self.persist();
        StoreOutcome::Applied
    }

    /// Drop every record and insert `rows` with fresh identifiers.
    pub fn replace_all(&mut self, rows: Vec<ChargeFields>) -> usize {
        let mut fresh = Vec::with_capacity(rows.len());
        for fields in rows {
            let id = self.allocate_id();
            fresh.push(Record::new(id, fields));
        }

        self.records = fresh;
        self.persist();
        self.records.len()
    }

    /// Bulk insert parsed CSV rows, only into an empty store.
    pub fn seed_from_csv(&mut self, text: &str, mapping: CsvMapping) -> SeedOutcome {
        if !self.is_empty() {
            return SeedOutcome::AlreadyPopulated;
        }

        let rows = parse_document(text, mapping);
        if rows.is_empty() {
            return SeedOutcome::Seeded(0);
        }

        SeedOutcome::Seeded(self.replace_all(rows))
    }

    /// Seed from a CSV file. The emptiness check runs before the file is read.
    pub fn seed_from_source(&mut self, path: &Path, mapping: CsvMapping) -> SeedOutcome {
        if !self.is_empty() {
            return SeedOutcome::AlreadyPopulated;
        }

        match fs::read_to_string(path) {
            Ok(text) => self.seed_from_csv(&text, mapping),
            Err(_) => SeedOutcome::SourceUnavailable,
        }
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.records) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warning(format!("Changes kept in memory but not saved: {e}"));
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
