//! CSV codec for the charging log.
//!
//! Reading is deliberately permissive (quotes may open anywhere in a field,
//! short rows are padded); writing quotes only when a value needs it, so a
//! document written here reads back field-for-field.

mod document;
mod line;

pub use document::{parse_document, serialize_document, serialize_value};
pub use line::parse_line;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How data columns are matched to schema fields on import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CsvMapping {
    /// Column *i* is schema field *i*; the header text is ignored.
    #[default]
    Positional,
    /// Columns are matched by header label (canonical or legacy name).
    Header,
}

impl CsvMapping {
    pub fn as_str(&self) -> &'static str {
        match self {
            CsvMapping::Positional => "positional",
            CsvMapping::Header => "header",
        }
    }
}
