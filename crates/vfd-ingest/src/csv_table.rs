//! Raw CSV table reading.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A source table as read from disk: one header row plus trimmed string
/// cells. Rows are immutable once read; typed parsing happens downstream.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Display name for diagnostics, taken from the file name.
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Returns the cell at `(row, column)` or the empty string when the row
    /// is ragged.
    pub fn cell<'a>(&'a self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into a [`CsvTable`].
///
/// The first non-blank row is the header row; fully blank rows are skipped;
/// ragged data rows are padded on access. Cells are trimmed and BOM-stripped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let name = path
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("<table>")
        .to_string();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Ok(CsvTable {
            name,
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let rows = raw_rows.split_off(1);
    Ok(CsvTable {
        name,
        headers,
        rows,
    })
}
