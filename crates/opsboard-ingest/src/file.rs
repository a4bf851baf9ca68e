//! Guarded file reads shared by the JSON and CSV loaders.

use std::path::Path;

use serde_json::Value;

use crate::error::{IngestError, Result};

/// Check file size against a limit before reading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

pub fn read_guarded(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    check_file_size(path, max_size)?;
    std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads and parses a JSON file. Object key order is preserved.
pub fn read_json(path: &Path, max_size: u64) -> Result<Value> {
    let bytes = read_guarded(path, max_size)?;
    serde_json::from_slice(&bytes).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}
