use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use opsboard_model::limits::{
    LAST_UPDATED_FALLBACK, MAX_DEPARTMENTS, REFRESH_GUIDANCE_FALLBACK, REPORTING_PERIOD_FALLBACK,
};
use opsboard_model::{Dataset, Department, InvalidInputError, Meta, Result, SCHEMA_VERSION};

use crate::coerce::{as_object, limit_array, non_blank, value_kind, warn_unknown_fields};
use crate::department::sanitize_department;
use crate::theme::sanitize_theme;
use crate::warning::{SanitizeWarning, Warnings};

const DATASET_FIELDS: &[&str] = &["schemaVersion", "meta", "departments", "theme"];
const META_FIELDS: &[&str] = &["reportingPeriod", "lastUpdated", "refreshGuidance"];

/// A sanitized dataset together with the typed warnings behind its
/// `warnings` messages.
#[derive(Debug, Clone, Serialize)]
pub struct Sanitized {
    pub dataset: Dataset,
    pub warnings: Vec<SanitizeWarning>,
}

/// Sanitizes a raw dataset value.
///
/// # Errors
///
/// Returns [`InvalidInputError`] when `raw` is not an object or is an object
/// without any fields. Every other defect becomes a fallback plus a warning.
pub fn sanitize_dataset(raw: &Value) -> Result<Dataset> {
    sanitize(raw).map(|sanitized| sanitized.dataset)
}

/// Like [`sanitize_dataset`], also returning the typed warnings.
///
/// # Errors
///
/// See [`sanitize_dataset`].
pub fn sanitize(raw: &Value) -> Result<Sanitized> {
    let source = match raw {
        Value::Object(source) if source.is_empty() => return Err(InvalidInputError::Empty),
        Value::Object(source) => source,
        other => {
            return Err(InvalidInputError::NotAnObject {
                found: value_kind(other),
            });
        }
    };

    let mut warnings = Warnings::new();
    warn_unknown_fields(source, DATASET_FIELDS, "dataset", &mut warnings);

    let schema_version_declared = check_schema_version(source.get("schemaVersion"), &mut warnings);
    let meta = sanitize_meta(source.get("meta"), &mut warnings);

    let raw_departments = limit_array(
        source.get("departments"),
        MAX_DEPARTMENTS,
        "departments",
        &mut warnings,
    );
    if raw_departments.is_empty() {
        warnings.push(SanitizeWarning::NoDepartments);
    }
    let mut departments: Vec<Department> = raw_departments
        .iter()
        .enumerate()
        .map(|(index, raw)| sanitize_department(raw, index, &mut warnings))
        .collect();
    if departments.is_empty() {
        departments.push(Department::placeholder(0));
    }

    let theme = sanitize_theme(source.get("theme"), &mut warnings);

    debug!(
        department_count = departments.len(),
        themed = theme.is_some(),
        warning_count = warnings.len(),
        "dataset sanitized"
    );

    let dataset = Dataset {
        schema_version_declared,
        meta,
        departments,
        theme,
        warnings: warnings.messages(),
    };
    Ok(Sanitized {
        dataset,
        warnings: warnings.into_inner(),
    })
}

/// Warns on a missing or unsupported version but never rejects.
///
/// Returns the declared version only when it is an integer that fits `i64`
/// exactly. Strings (even `"1"`), fractions and out-of-range numbers return
/// `None` and are reported as unsupported.
fn check_schema_version(value: Option<&Value>, warnings: &mut Warnings) -> Option<i64> {
    let value = match value {
        None | Some(Value::Null) => {
            warnings.push(SanitizeWarning::SchemaVersionMissing);
            return None;
        }
        Some(value) => value,
    };
    let declared = value.as_i64().or_else(|| value.as_f64().and_then(exact_i64));
    if declared != Some(SCHEMA_VERSION) {
        let declared = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        warnings.push(SanitizeWarning::SchemaVersionUnsupported { declared });
    }
    declared
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn exact_i64(version: f64) -> Option<i64> {
    let in_range = version >= i64::MIN as f64 && version < i64::MAX as f64;
    (in_range && version.fract() == 0.0).then_some(version as i64)
}

fn sanitize_meta(raw: Option<&Value>, warnings: &mut Warnings) -> Meta {
    let empty = Map::new();
    let source = as_object(raw).unwrap_or(&empty);
    warn_unknown_fields(source, META_FIELDS, "meta", warnings);
    Meta {
        reporting_period: meta_field(
            source,
            "reportingPeriod",
            REPORTING_PERIOD_FALLBACK,
            "fallback copy",
            warnings,
        ),
        last_updated: meta_field(
            source,
            "lastUpdated",
            LAST_UPDATED_FALLBACK,
            "fallback copy",
            warnings,
        ),
        refresh_guidance: meta_field(
            source,
            "refreshGuidance",
            REFRESH_GUIDANCE_FALLBACK,
            "default guidance",
            warnings,
        ),
    }
}

fn meta_field(
    source: &Map<String, Value>,
    field: &'static str,
    fallback: &str,
    note: &'static str,
    warnings: &mut Warnings,
) -> String {
    match non_blank(source.get(field)) {
        Some(value) => value.to_string(),
        None => {
            warnings.push(SanitizeWarning::MetaFieldMissing { field, note });
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_objects() {
        assert_eq!(
            sanitize_dataset(&Value::Null),
            Err(InvalidInputError::NotAnObject { found: "null" })
        );
        assert_eq!(
            sanitize_dataset(&json!([1, 2])),
            Err(InvalidInputError::NotAnObject { found: "an array" })
        );
        assert_eq!(sanitize_dataset(&json!({})), Err(InvalidInputError::Empty));
    }

    #[test]
    fn missing_schema_version_assumes_v1() {
        let mut warnings = Warnings::new();
        assert_eq!(check_schema_version(None, &mut warnings), None);
        assert_eq!(
            warnings.messages(),
            vec!["Dataset missing schemaVersion; assuming v1."]
        );
    }

    #[test]
    fn integral_float_version_is_supported() {
        let mut warnings = Warnings::new();
        assert_eq!(check_schema_version(Some(&json!(1.0)), &mut warnings), Some(1));
        assert!(warnings.is_empty());
    }

    #[test]
    fn mismatched_version_warns_but_continues() {
        let mut warnings = Warnings::new();
        assert_eq!(check_schema_version(Some(&json!(99)), &mut warnings), Some(99));
        assert_eq!(check_schema_version(Some(&json!("1")), &mut warnings), None);
        assert_eq!(
            warnings.messages(),
            vec![
                "Dataset schemaVersion 99 is not supported; attempting to coerce to v1.",
                "Dataset schemaVersion 1 is not supported; attempting to coerce to v1.",
            ]
        );
    }

    #[test]
    fn out_of_range_version_is_not_recorded() {
        let mut warnings = Warnings::new();
        assert_eq!(check_schema_version(Some(&json!(u64::MAX)), &mut warnings), None);
        assert_eq!(check_schema_version(Some(&json!(1e19)), &mut warnings), None);
        assert_eq!(check_schema_version(Some(&json!(1.5)), &mut warnings), None);
        assert_eq!(
            warnings.messages()[0],
            "Dataset schemaVersion 18446744073709551615 is not supported; attempting to coerce to v1."
        );
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn large_integral_float_is_recorded_exactly() {
        let mut warnings = Warnings::new();
        assert_eq!(
            check_schema_version(Some(&json!(-9_007_199_254_740_992.0)), &mut warnings),
            Some(-9_007_199_254_740_992)
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn meta_warns_per_fallback_field() {
        let mut warnings = Warnings::new();
        let raw = json!({ "reportingPeriod": "Week 18", "lastUpdated": "  ", "stray": true });
        let meta = sanitize_meta(Some(&raw), &mut warnings);
        assert_eq!(meta.reporting_period, "Week 18");
        assert_eq!(meta.last_updated, "Unknown");
        assert_eq!(
            meta.refresh_guidance,
            "Import a new offline dataset to refresh the view."
        );
        assert_eq!(
            warnings.messages(),
            vec![
                "meta has unknown fields: stray.",
                "Meta.lastUpdated is missing; displaying fallback copy.",
                "Meta.refreshGuidance is missing; displaying default guidance.",
            ]
        );
    }

    #[test]
    fn literal_fallback_text_is_not_a_fallback() {
        let mut warnings = Warnings::new();
        let raw = json!({
            "reportingPeriod": "Not specified",
            "lastUpdated": "Unknown",
            "refreshGuidance": "Import a new offline dataset to refresh the view.",
        });
        sanitize_meta(Some(&raw), &mut warnings);
        assert!(warnings.is_empty());
    }
}
