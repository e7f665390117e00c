// src/export/mod.rs

mod fs_utils;
pub mod logic;
mod writers;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain CSV
    Csv,
    /// CSV with a UTF-8 BOM so spreadsheet apps pick the right encoding
    Sheets,
    /// Pretty-printed JSON array, record ids included
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Sheets => "sheets",
            ExportFormat::Json => "json",
        }
    }

    /// File name suggested when the user gives a directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "ev_charging_records.csv",
            ExportFormat::Sheets => "ev_charging_records_sheets.csv",
            ExportFormat::Json => "ev_charging_records.json",
        }
    }
}
