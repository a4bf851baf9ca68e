//! Dataset sanitization for the offline operations dashboard.
//!
//! [`sanitize_dataset`] takes an untrusted JSON value and always produces a
//! complete, renderable [`opsboard_model::Dataset`]. Only a top-level value
//! that is not a dataset object is rejected; every defect below the top level
//! is replaced by a documented fallback and reported as a warning.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let dataset = opsboard_validate::sanitize_dataset(&json!({
//!     "schemaVersion": 1,
//!     "meta": {},
//!     "departments": [],
//! }))
//! .expect("object input");
//! assert_eq!(dataset.departments[0].id, "dept-1");
//! assert!(!dataset.warnings.is_empty());
//! ```

pub mod coerce;
mod department;
mod sanitizer;
mod theme;
mod warning;

pub use sanitizer::{Sanitized, sanitize, sanitize_dataset};
pub use warning::{SanitizeWarning, Warnings};
