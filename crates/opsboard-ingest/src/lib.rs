//! Dataset import for the offline operations dashboard.
//!
//! This crate turns files into a raw `serde_json::Value` shaped like a
//! dataset. It only parses syntax; all validation and fallback handling is
//! left to `opsboard-validate`.
//!
//! # Features
//!
//! - **JSON**: a single dataset document, key order preserved
//! - **CSV bundles**: `meta.csv` + `departments.csv` with optional
//!   `metrics.csv`, `trend-points.csv`, `projects.csv`, `highlights.csv`,
//!   `meetings.csv`, and `theme.json`
//! - **Size guard**: every file is checked against [`MAX_IMPORT_BYTES`]
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use opsboard_ingest::{IngestOptions, load_raw_dataset};
//!
//! let raw = load_raw_dataset(Path::new("exports/week18"), &IngestOptions::default())?;
//! ```

mod error;
mod file;
mod options;
mod tabular;

use std::path::Path;

use serde_json::Value;
use tracing::info;

// === Error Types ===
pub use error::{IngestError, Result};

// === Configuration ===
pub use options::{ImportFormat, IngestOptions, MAX_IMPORT_BYTES};

// === Readers ===
pub use tabular::{
    CsvRow, DEPARTMENTS_FILE, HIGHLIGHTS_FILE, MEETINGS_FILE, META_FILE, METRICS_FILE,
    PROJECTS_FILE, THEME_FILE, TREND_POINTS_FILE, parse_number, read_csv_bundle, read_csv_rows,
};
pub use file::{check_file_size, read_json};

/// A raw dataset value and the format it was read from.
#[derive(Debug, Clone)]
pub struct RawDataset {
    pub format: ImportFormat,
    pub value: Value,
}

/// Loads a raw dataset from a JSON file or a CSV bundle directory.
///
/// # Errors
///
/// Returns an [`IngestError`] for missing files, oversized files, and
/// syntax errors.
pub fn load_raw_dataset(path: &Path, options: &IngestOptions) -> Result<RawDataset> {
    let format = options.resolve_format(path);
    let value = match format {
        ImportFormat::Json => read_json(path, options.max_file_bytes)?,
        ImportFormat::Csv => read_csv_bundle(path, options.max_file_bytes)?,
    };
    info!(path = %path.display(), %format, "dataset loaded");
    Ok(RawDataset { format, value })
}
