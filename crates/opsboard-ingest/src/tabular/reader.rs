//! Header-keyed CSV reading.

use std::collections::BTreeMap;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{IngestError, Result};
use crate::file::read_guarded;

/// One data row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    cells: BTreeMap<String, String>,
}

impl CsvRow {
    /// Cell value, or `None` when the file has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Cell value when the column exists and the cell is not empty.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.is_empty())
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file whose first non-blank line is the header row.
///
/// Cells are trimmed, blank lines are skipped, and short rows are padded with
/// empty cells. Quoted fields may contain commas and doubled quotes.
pub fn read_csv_rows(path: &Path, max_size: u64) -> Result<Vec<CsvRow>> {
    let bytes = read_guarded(path, max_size)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes.as_slice());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let Some(columns) = headers.as_ref() else {
            headers = Some(record.iter().map(normalize_header).collect());
            continue;
        };
        let cells = columns
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        rows.push(CsvRow { cells });
    }
    Ok(rows)
}

/// Parses a numeric cell. Empty and non-finite cells yield `None`.
pub fn parse_number(value: &str) -> Option<serde_json::Value> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(integer.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .map(serde_json::Value::from)
}
