// src/export/logic.rs

use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::writers::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every record of `store`.
    ///
    /// - `file`: absolute path of the output file, or an existing directory
    ///   (the format's default file name is used inside it)
    /// - `force`: overwrite without asking
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let mut path = PathBuf::from(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if path.is_dir() {
            path = path.join(format.default_file_name());
        }

        if store.is_empty() {
            warning("No records to export yet.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;
        Self::write(store, format, &path)?;

        Ok(Some(path))
    }

    fn write(store: &RecordStore, format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Csv => export_csv(store.list(), path, false),
            ExportFormat::Sheets => export_csv(store.list(), path, true),
            ExportFormat::Json => export_json(store.list(), path),
        }
    }
}
