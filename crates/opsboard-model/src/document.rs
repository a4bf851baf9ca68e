//! The dataset shape written by the importer.
//!
//! A document carries only input fields, so it can be fed back through the
//! sanitizer without tripping unknown-field warnings.

use serde::Serialize;

use crate::dataset::{Dataset, Department, Meta};
use crate::limits::SCHEMA_VERSION;
use crate::theme::ThemeSource;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDocument<'a> {
    pub schema_version: i64,
    pub meta: &'a Meta,
    pub departments: &'a [Department],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<&'a ThemeSource>,
}

impl<'a> From<&'a Dataset> for DatasetDocument<'a> {
    fn from(dataset: &'a Dataset) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            meta: &dataset.meta,
            departments: &dataset.departments,
            theme: dataset.theme.as_ref().map(|theme| &theme.source),
        }
    }
}
