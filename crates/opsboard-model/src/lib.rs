//! Normalized data model for the offline operations dashboard.
//!
//! Every type in this crate is the *output* side of sanitization: values are
//! always fully populated, collections are already capped, and there is no
//! optional data except the theme. Raw input stays a `serde_json::Value`
//! until `opsboard-validate` turns it into a [`Dataset`].

pub mod dataset;
pub mod document;
pub mod error;
pub mod limits;
pub mod theme;

pub use dataset::{
    Dataset, Department, ListItem, Meeting, Meta, Metric, MetricTrend, Section, Trend, TrendPoint,
};
pub use document::DatasetDocument;
pub use error::{InvalidInputError, Result};
pub use limits::SCHEMA_VERSION;
pub use theme::{THEME_TOKENS, Theme, ThemeGroup, ThemeSource, ThemeToken, tokens_for_group};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_department_uses_one_based_naming() {
        let department = Department::placeholder(0);
        assert_eq!(department.id, "dept-1");
        assert_eq!(department.name, "Department 1");
        assert!(department.metrics.is_empty());
        assert!(department.trend.datapoints.is_empty());
        assert!(department.projects.items.is_empty());
        assert!(department.highlights.items.is_empty());
        assert!(department.meetings.is_empty());
    }

    #[test]
    fn dataset_serializes_camel_case() {
        let dataset = Dataset {
            schema_version_declared: Some(1),
            meta: Meta::default(),
            departments: vec![Department::placeholder(0)],
            theme: None,
            warnings: vec![],
        };
        let json = serde_json::to_value(&dataset).expect("serialize dataset");
        assert_eq!(json["schemaVersionDeclared"], 1);
        assert_eq!(json["meta"]["reportingPeriod"], "Not specified");
        assert_eq!(json["departments"][0]["id"], "dept-1");
        assert!(json.get("theme").is_none());
    }
}
