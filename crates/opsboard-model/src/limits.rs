//! Collection caps and fixed fallback copy.
//!
//! The caps bound the work a single sanitization call can do regardless of
//! how large the raw input is.

/// The only dataset schema version this build understands.
pub const SCHEMA_VERSION: i64 = 1;

pub const MAX_DEPARTMENTS: usize = 50;
pub const MAX_METRICS: usize = 50;
pub const MAX_TREND_POINTS: usize = 366;
pub const MAX_LIST_ITEMS: usize = 200;
pub const MAX_MEETINGS: usize = 100;

pub const REPORTING_PERIOD_FALLBACK: &str = "Not specified";
pub const LAST_UPDATED_FALLBACK: &str = "Unknown";
pub const REFRESH_GUIDANCE_FALLBACK: &str = "Import a new offline dataset to refresh the view.";
