//! Sanitization warnings.
//!
//! Each variant carries only the data its message needs. The collector is
//! created per call and passed down by `&mut`, so warning order is exactly
//! the order in which anomalies were discovered.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use opsboard_model::SCHEMA_VERSION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SanitizeWarning {
    /// An object carried keys outside its recognized set.
    UnknownFields { path: String, fields: Vec<String> },
    /// No `schemaVersion` was declared.
    SchemaVersionMissing,
    /// A `schemaVersion` other than the supported one was declared.
    SchemaVersionUnsupported { declared: String },
    /// A meta field was missing, not a string, or blank.
    MetaFieldMissing {
        field: &'static str,
        note: &'static str,
    },
    /// A collection exceeded its cap; trailing entries were dropped.
    Truncated {
        path: String,
        limit: usize,
        dropped: usize,
    },
    /// No department entries were supplied.
    NoDepartments,
    /// A department entry was not an object.
    DepartmentNotObject { index: usize },
    /// A list entry was not an object and was replaced.
    EntryNotObject {
        path: String,
        index: usize,
        replacement: &'static str,
    },
    /// A department trend has no datapoints.
    EmptyTrend { path: String },
    /// `theme` was neither an object nor null.
    ThemeNotObject { found: &'static str },
    /// A theme group was not an object.
    ThemeGroupNotObject { group: &'static str },
    /// A recognized theme token had an unusable value.
    InvalidThemeToken {
        group: &'static str,
        token: String,
    },
    /// A theme object was supplied but no token survived.
    ThemeEmpty,
}

impl SanitizeWarning {
    /// Stable short identifier for grouping and display.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownFields { .. } => "unknown-fields",
            Self::SchemaVersionMissing => "schema-version-missing",
            Self::SchemaVersionUnsupported { .. } => "schema-version-unsupported",
            Self::MetaFieldMissing { .. } => "meta-field-missing",
            Self::Truncated { .. } => "truncated",
            Self::NoDepartments => "no-departments",
            Self::DepartmentNotObject { .. } => "department-not-object",
            Self::EntryNotObject { .. } => "entry-not-object",
            Self::EmptyTrend { .. } => "empty-trend",
            Self::ThemeNotObject { .. } => "theme-not-object",
            Self::ThemeGroupNotObject { .. } => "theme-group-not-object",
            Self::InvalidThemeToken { .. } => "invalid-theme-token",
            Self::ThemeEmpty => "theme-empty",
        }
    }
}

impl fmt::Display for SanitizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFields { path, fields } => {
                write!(f, "{path} has unknown fields: {}.", fields.join(", "))
            }
            Self::SchemaVersionMissing => {
                write!(f, "Dataset missing schemaVersion; assuming v{SCHEMA_VERSION}.")
            }
            Self::SchemaVersionUnsupported { declared } => write!(
                f,
                "Dataset schemaVersion {declared} is not supported; attempting to coerce to v{SCHEMA_VERSION}."
            ),
            Self::MetaFieldMissing { field, note } => {
                write!(f, "Meta.{field} is missing; displaying {note}.")
            }
            Self::Truncated {
                path,
                limit,
                dropped,
            } => write!(
                f,
                "{path} exceeded {limit} entries; ignoring {dropped} extra."
            ),
            Self::NoDepartments => f.write_str(
                "No departments supplied; dashboard will render placeholder content.",
            ),
            Self::DepartmentNotObject { index } => write!(
                f,
                "Department at index {index} is not an object; using fallback department."
            ),
            Self::EntryNotObject {
                path,
                index,
                replacement,
            } => write!(
                f,
                "{path}[{index}] is not an object; using fallback {replacement}."
            ),
            Self::EmptyTrend { path } => write!(
                f,
                "{path}.datapoints is empty; chart will render placeholder values."
            ),
            Self::ThemeNotObject { found } => write!(
                f,
                "theme must be an object but was {found}; ignoring theme overrides."
            ),
            Self::ThemeGroupNotObject { group } => {
                write!(f, "theme.{group} is not an object; ignoring group.")
            }
            Self::InvalidThemeToken { group, token } => write!(
                f,
                "theme.{group}.{token} is not a non-empty string or finite number; skipping token."
            ),
            Self::ThemeEmpty => f.write_str("theme has no valid tokens; using default styling."),
        }
    }
}

/// Append-only warning collector scoped to one sanitization call.
#[derive(Debug, Default)]
pub struct Warnings {
    entries: Vec<SanitizeWarning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: SanitizeWarning) {
        trace!(code = warning.code(), %warning, "dataset warning");
        self.entries.push(warning);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SanitizeWarning> {
        self.entries.iter()
    }

    /// Rendered messages, in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn into_inner(self) -> Vec<SanitizeWarning> {
        self.entries
    }
}
