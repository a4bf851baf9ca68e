//! Header-keyed CSV reading and bundle assembly.

mod bundle;
mod reader;

pub use bundle::{
    DEPARTMENTS_FILE, HIGHLIGHTS_FILE, MEETINGS_FILE, META_FILE, METRICS_FILE, PROJECTS_FILE,
    THEME_FILE, TREND_POINTS_FILE, read_csv_bundle,
};
pub use reader::{CsvRow, parse_number, read_csv_rows};
