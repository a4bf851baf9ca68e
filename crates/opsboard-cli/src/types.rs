use std::path::PathBuf;

use opsboard_ingest::ImportFormat;
use opsboard_model::Dataset;

#[derive(Debug)]
pub struct ImportResult {
    pub input: PathBuf,
    pub format: ImportFormat,
    /// Where the normalized document was written; `None` for `check` and dry runs.
    pub output: Option<PathBuf>,
    pub dataset: Dataset,
}
