//! Error types for dataset import.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning files into a raw dataset value.
///
/// These are syntax and file-system failures only; content problems are the
/// sanitizer's business and never surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// CSV bundle directory not found.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the import size guard.
    #[error("dataset is too large ({size} bytes in {path}); maximum supported size is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Parsing Errors ===
    /// File is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File is not valid CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Bundle Errors ===
    /// A required bundle file is missing.
    #[error("CSV import requires {file} to be present within {dir}")]
    MissingBundleFile { file: &'static str, dir: PathBuf },

    /// Unknown `--format` value.
    #[error("unsupported format: {format}")]
    UnsupportedFormat { format: String },
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingBundleFile {
            file: "meta.csv",
            dir: PathBuf::from("/data/export"),
        };
        assert_eq!(
            err.to_string(),
            "CSV import requires meta.csv to be present within /data/export"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = IngestError::FileTooLarge {
            path: PathBuf::from("big.json"),
            size: 3_145_728,
            max_size: 2_097_152,
        };
        assert!(err.to_string().starts_with("dataset is too large"));
    }
}
