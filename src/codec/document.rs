use super::CsvMapping;
use super::line::parse_line;
use crate::errors::{AppError, AppResult};
use crate::models::{ChargeFields, Field, SCHEMA};
use std::borrow::Cow;

const BOM: char = '\u{feff}';

/// Parse a whole CSV document into row mappings.
///
/// Blank lines are skipped and the first remaining line is always the header.
/// Rows shorter than the schema are padded with empty values; unknown columns
/// are dropped.
pub fn parse_document(text: &str, mapping: CsvMapping) -> Vec<ChargeFields> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };

    let columns: Vec<Option<Field>> = match mapping {
        CsvMapping::Positional => SCHEMA.iter().copied().map(Some).collect(),
        CsvMapping::Header => parse_line(header)
            .iter()
            .map(|label| Field::from_header(label))
            .collect(),
    };

    lines
        .map(|line| {
            let mut row = ChargeFields::default();
            for (column, value) in columns.iter().zip(parse_line(line)) {
                if let Some(field) = column {
                    row.set(*field, value);
                }
            }
            row
        })
        .collect()
}

/// Quote a value iff it contains a comma, quote or line break.
pub fn serialize_value(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Header line plus one line per row, fields in `schema` order, joined by `\n`
/// without a trailing newline.
pub fn serialize_document<'a, I>(rows: I, schema: &[Field]) -> AppResult<String>
where
    I: IntoIterator<Item = &'a ChargeFields>,
{
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(schema.iter().map(|f| f.name()))?;

    for row in rows {
        wtr.write_record(schema.iter().map(|f| row.get(*f)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let mut out = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}
