// src/export/writers.rs

use crate::codec::serialize_document;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::{Record, SCHEMA};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// CSV text for `records`, optionally BOM-prefixed for spreadsheets.
pub(crate) fn render_csv(records: &[Record], with_bom: bool) -> AppResult<String> {
    let body = serialize_document(records.iter().map(|r| &r.fields), &SCHEMA)?;
    Ok(if with_bom {
        format!("{UTF8_BOM}{body}")
    } else {
        body
    })
}

pub(crate) fn export_csv(records: &[Record], path: &Path, with_bom: bool) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    fs::write(path, render_csv(records, with_bom)?)?;

    let label = if with_bom { "Spreadsheet CSV" } else { "CSV" };
    notify_export_success(label, path);
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}
