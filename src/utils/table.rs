//! Table rendering utilities for CLI outputs.
//!
//! Column widths are measured on the visible text (ANSI colour codes and
//! wide characters are accounted for), so coloured cells still line up.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ansi pattern"));

/// Display width of `s` once ANSI escapes are removed.
pub fn visible_width(s: &str) -> usize {
    ANSI_ESCAPE.replace_all(s, "").width()
}

pub struct Column {
    pub header: String,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
        }
    }

    /// Cells wider than `width` are truncated with an ellipsis.
    pub fn truncated(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        let cell = row.get(i).map(String::as_str).unwrap_or("");
                        fit(cell, col.max_width)
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                rows.iter()
                    .map(|r| visible_width(&r[i]))
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push_str("  ");
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&pad(cell, *w));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    format!("{cell}{}", " ".repeat(fill))
}

/// Truncate plain cells only; coloured cells are short by construction.
fn fit(cell: &str, max_width: Option<usize>) -> String {
    match max_width {
        Some(max) if cell.width() > max && !ANSI_ESCAPE.is_match(cell) => {
            let mut out = String::new();
            // one column is kept for the ellipsis
            for ch in cell.chars() {
                if out.width() + ch.width().unwrap_or(0) + 1 > max {
                    break;
                }
                out.push(ch);
            }
            out.push('…');
            out
        }
        _ => cell.to_string(),
    }
}
