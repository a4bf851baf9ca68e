//! CSV bundle assembly.
//!
//! A bundle is a directory holding `meta.csv` and `departments.csv` plus
//! optional per-section files. Rows are grouped under their department by
//! `departmentId`; the result is a plain nested JSON object with no
//! validation applied.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::file::read_json;

use super::reader::{CsvRow, parse_number, read_csv_rows};

pub const META_FILE: &str = "meta.csv";
pub const DEPARTMENTS_FILE: &str = "departments.csv";
pub const METRICS_FILE: &str = "metrics.csv";
pub const TREND_POINTS_FILE: &str = "trend-points.csv";
pub const PROJECTS_FILE: &str = "projects.csv";
pub const HIGHLIGHTS_FILE: &str = "highlights.csv";
pub const MEETINGS_FILE: &str = "meetings.csv";
pub const THEME_FILE: &str = "theme.json";

#[derive(Debug, Default)]
struct DepartmentDraft {
    fields: Map<String, Value>,
    trend_context: Option<String>,
    projects_context: Option<String>,
    highlights_context: Option<String>,
    metrics: Vec<Value>,
    datapoints: Vec<Value>,
    projects: Vec<Value>,
    highlights: Vec<Value>,
    meetings: Vec<Value>,
}

impl DepartmentDraft {
    fn from_row(row: &CsvRow) -> Self {
        let mut fields = Map::new();
        insert_text(&mut fields, "id", row.get("id"));
        insert_text(&mut fields, "name", row.get("name"));
        insert_text(&mut fields, "summary", row.get("summary"));
        Self {
            fields,
            trend_context: row.get("trendContext").map(str::to_string),
            projects_context: row.get("projectsContext").map(str::to_string),
            highlights_context: row.get("highlightsContext").map(str::to_string),
            ..Self::default()
        }
    }

    fn into_value(self) -> Value {
        let mut department = self.fields;
        department.insert("metrics".to_string(), Value::Array(self.metrics));
        department.insert(
            "trend".to_string(),
            section(self.trend_context, "datapoints", self.datapoints),
        );
        department.insert(
            "projects".to_string(),
            section(self.projects_context, "items", self.projects),
        );
        department.insert(
            "highlights".to_string(),
            section(self.highlights_context, "items", self.highlights),
        );
        department.insert("meetings".to_string(), Value::Array(self.meetings));
        Value::Object(department)
    }
}

fn section(context: Option<String>, key: &str, entries: Vec<Value>) -> Value {
    let mut object = Map::new();
    if let Some(context) = context {
        object.insert("context".to_string(), Value::String(context));
    }
    object.insert(key.to_string(), Value::Array(entries));
    Value::Object(object)
}

fn insert_text(object: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        object.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn insert_number(object: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(number) = value.and_then(parse_number) {
        object.insert(key.to_string(), number);
    }
}

fn list_item(row: &CsvRow) -> Value {
    let mut item = Map::new();
    insert_text(&mut item, "title", row.get("title"));
    insert_text(&mut item, "subtitle", row.get("subtitle"));
    insert_text(&mut item, "meta", row.get("meta"));
    Value::Object(item)
}

/// Builds a raw dataset value from a CSV bundle directory.
///
/// # Errors
///
/// Fails when the directory or one of its two required files is missing, or
/// when any present file cannot be read or parsed.
pub fn read_csv_bundle(dir: &Path, max_size: u64) -> Result<Value> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    for required in [META_FILE, DEPARTMENTS_FILE] {
        if !dir.join(required).is_file() {
            return Err(IngestError::MissingBundleFile {
                file: required,
                dir: dir.to_path_buf(),
            });
        }
    }

    let mut meta = Map::new();
    for row in read_csv_rows(&dir.join(META_FILE), max_size)? {
        if let Some(key) = row.non_empty("key") {
            let value = row.get("value").unwrap_or("");
            meta.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    let mut drafts: Vec<DepartmentDraft> = Vec::new();
    let mut lookup: HashMap<String, usize> = HashMap::new();
    for row in read_csv_rows(&dir.join(DEPARTMENTS_FILE), max_size)? {
        if let Some(id) = row.get("id") {
            lookup.insert(id.to_string(), drafts.len());
        }
        drafts.push(DepartmentDraft::from_row(&row));
    }

    ingest_section(dir, METRICS_FILE, max_size, &lookup, &mut drafts, |row, draft| {
        let mut metric = Map::new();
        insert_text(&mut metric, "label", row.get("label"));
        insert_number(&mut metric, "value", row.get("value"));
        insert_text(&mut metric, "suffix", row.get("suffix"));
        let mut trend = Map::new();
        insert_text(&mut trend, "label", row.get("trendLabel"));
        insert_text(&mut trend, "description", row.get("trendDescription"));
        metric.insert("trend".to_string(), Value::Object(trend));
        draft.metrics.push(Value::Object(metric));
    })?;
    ingest_section(dir, TREND_POINTS_FILE, max_size, &lookup, &mut drafts, |row, draft| {
        let mut point = Map::new();
        insert_text(&mut point, "label", row.get("label"));
        insert_number(&mut point, "value", row.get("value"));
        draft.datapoints.push(Value::Object(point));
    })?;
    ingest_section(dir, PROJECTS_FILE, max_size, &lookup, &mut drafts, |row, draft| {
        draft.projects.push(list_item(row));
    })?;
    ingest_section(dir, HIGHLIGHTS_FILE, max_size, &lookup, &mut drafts, |row, draft| {
        draft.highlights.push(list_item(row));
    })?;
    ingest_section(dir, MEETINGS_FILE, max_size, &lookup, &mut drafts, |row, draft| {
        let mut meeting = Map::new();
        insert_text(&mut meeting, "title", row.get("title"));
        insert_text(&mut meeting, "description", row.get("description"));
        insert_text(&mut meeting, "time", row.get("time"));
        draft.meetings.push(Value::Object(meeting));
    })?;

    let theme_path = dir.join(THEME_FILE);
    let theme = if theme_path.is_file() {
        read_json(&theme_path, max_size)?
    } else {
        Value::Null
    };

    info!(
        bundle = %dir.display(),
        department_count = drafts.len(),
        meta_fields = meta.len(),
        themed = !theme.is_null(),
        "csv bundle assembled"
    );

    let departments = drafts.into_iter().map(DepartmentDraft::into_value).collect();
    let mut dataset = Map::new();
    dataset.insert("meta".to_string(), Value::Object(meta));
    dataset.insert("departments".to_string(), Value::Array(departments));
    dataset.insert("theme".to_string(), theme);
    Ok(Value::Object(dataset))
}

/// Applies `handler` to each row of an optional section file whose
/// `departmentId` matches a known department.
fn ingest_section<F>(
    dir: &Path,
    file: &str,
    max_size: u64,
    lookup: &HashMap<String, usize>,
    drafts: &mut [DepartmentDraft],
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&CsvRow, &mut DepartmentDraft),
{
    let path = dir.join(file);
    if !path.is_file() {
        debug!(file, "optional bundle file absent");
        return Ok(());
    }
    let rows = read_csv_rows(&path, max_size)?;
    let mut applied = 0usize;
    for row in &rows {
        let Some(&index) = row.get("departmentId").and_then(|id| lookup.get(id)) else {
            debug!(
                file,
                department_id = row.get("departmentId").unwrap_or(""),
                "skipping row for unknown department"
            );
            continue;
        };
        handler(row, &mut drafts[index]);
        applied += 1;
    }
    debug!(file, rows = rows.len(), applied, "bundle section ingested");
    Ok(())
}
