//! Persistence boundary for the record store.
//!
//! A snapshot is the ordered list of records encoded as a JSON array of
//! objects (`id` plus one key per schema field).

use crate::errors::AppResult;
use crate::models::Record;

/// Storage backend for the record snapshot.
pub trait SnapshotStore {
    /// Previously saved snapshot, or `None` if nothing was ever saved.
    fn load(&self) -> AppResult<Option<Vec<Record>>>;

    /// Overwrite the saved snapshot.
    fn save(&mut self, records: &[Record]) -> AppResult<()>;
}

pub fn encode_snapshot(records: &[Record]) -> AppResult<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn decode_snapshot(payload: &str) -> AppResult<Vec<Record>> {
    Ok(serde_json::from_str(payload)?)
}

/// Keeps the encoded snapshot in memory. Used for throwaway stores.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    payload: Option<String>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already encoded snapshot.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> AppResult<Option<Vec<Record>>> {
        self.payload.as_deref().map(decode_snapshot).transpose()
    }

    fn save(&mut self, records: &[Record]) -> AppResult<()> {
        self.payload = Some(encode_snapshot(records)?);
        Ok(())
    }
}
