//! Import configuration.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::IngestError;

/// Maximum accepted size of any single import file (2 MiB).
pub const MAX_IMPORT_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// A single JSON document.
    Json,
    /// A directory of CSV files plus an optional `theme.json`.
    Csv,
}

impl ImportFormat {
    /// Paths ending in `.json` are JSON; anything else is treated as a CSV bundle.
    pub fn detect(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Self::Json } else { Self::Csv }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(IngestError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Options controlling dataset import.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Explicit format; detected from the path when `None`.
    pub format: Option<ImportFormat>,
    /// Per-file size guard in bytes.
    pub max_file_bytes: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            format: None,
            max_file_bytes: MAX_IMPORT_BYTES,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(mut self, format: Option<ImportFormat>) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    /// The explicit format, or the one detected from `path`.
    pub fn resolve_format(&self, path: &Path) -> ImportFormat {
        self.format.unwrap_or_else(|| ImportFormat::detect(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_json_by_extension() {
        assert_eq!(ImportFormat::detect(Path::new("data/set.JSON")), ImportFormat::Json);
        assert_eq!(ImportFormat::detect(Path::new("data/export")), ImportFormat::Csv);
        assert_eq!(ImportFormat::detect(Path::new("data/export.csv")), ImportFormat::Csv);
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("JSON".parse::<ImportFormat>().ok(), Some(ImportFormat::Json));
        assert!(matches!(
            "xml".parse::<ImportFormat>(),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn explicit_format_wins() {
        let options = IngestOptions::new().with_format(Some(ImportFormat::Json));
        assert_eq!(options.resolve_format(Path::new("export")), ImportFormat::Json);
    }
}
