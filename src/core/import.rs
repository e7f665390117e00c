use crate::codec::{CsvMapping, parse_document};
use crate::core::store::{RecordStore, SeedOutcome};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Outcome of an explicit `import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Rows added to a previously empty logbook.
    Seeded(usize),
    /// Rows that replaced the whole logbook.
    Replaced(usize),
    /// The logbook already had records and `replace` was not requested.
    AlreadyPopulated,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import a CSV file.
    ///
    /// Without `replace` this is a seed: it only fills an empty logbook.
    /// With `replace` every existing record is dropped first.
    pub fn apply(
        store: &mut RecordStore,
        path: &Path,
        mapping: CsvMapping,
        replace: bool,
    ) -> AppResult<ImportOutcome> {
        if !replace && !store.is_empty() {
            return Ok(ImportOutcome::AlreadyPopulated);
        }

        let text = fs::read_to_string(path).map_err(|e| {
            AppError::from(std::io::Error::new(
                e.kind(),
                format!("cannot read {}: {e}", path.display()),
            ))
        })?;

        if replace {
            let rows = parse_document(&text, mapping);
            return Ok(ImportOutcome::Replaced(store.replace_all(rows)));
        }

        match store.seed_from_csv(&text, mapping) {
            SeedOutcome::Seeded(n) => Ok(ImportOutcome::Seeded(n)),
            SeedOutcome::AlreadyPopulated => Ok(ImportOutcome::AlreadyPopulated),
            SeedOutcome::SourceUnavailable => Err(AppError::Other(format!(
                "cannot read {}",
                path.display()
            ))),
        }
    }
}
