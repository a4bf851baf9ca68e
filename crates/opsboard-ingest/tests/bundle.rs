//! Integration tests for JSON and CSV bundle import.

use std::fs;
use std::path::Path;

use opsboard_ingest::{
    DEPARTMENTS_FILE, ImportFormat, IngestError, IngestOptions, META_FILE, load_raw_dataset,
    read_csv_bundle, read_csv_rows,
};
use opsboard_validate::sanitize;
use serde_json::json;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn operations_bundle() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    write(
        root,
        "meta.csv",
        "key,value\n\
         reportingPeriod,Week 18\n\
         lastUpdated,2026-05-02\n\
         refreshGuidance,\"Export again from the planner, then import.\"\n",
    );
    write(
        root,
        "departments.csv",
        "id,name,summary,trendContext,projectsContext,highlightsContext\n\
         ops,Operations,\"Runs the floor, \"\"mostly\"\" smoothly\",Weekly throughput,Active work,Wins\n\
         fin,Finance,Books and budgets,,,\n",
    );
    write(
        root,
        "metrics.csv",
        "departmentId,label,value,suffix,trendLabel,trendDescription\n\
         ops,Uptime,99.5,%,+0.3,vs last week\n\
         ops,Tickets,1204,,-12,fewer escalations\n\
         ghost,Orphan,1,,,\n",
    );
    write(
        root,
        "trend-points.csv",
        "departmentId,label,value\n\
         ops,Mon,12\n\
         ops,Tue,14.5\n\
         fin,Mon,3\n",
    );
    write(
        root,
        "projects.csv",
        "departmentId,title,subtitle,meta\n\
         ops,Dock rebuild,\"Phase 2, east side\",Due June\n",
    );
    write(
        root,
        "meetings.csv",
        "departmentId,title,description,time\n\
         fin,Budget review,Quarterly check-in,Thu 10:00\n",
    );
    dir
}

#[test]
fn csv_bundle_groups_rows_by_department() {
    let dir = operations_bundle();
    let value = read_csv_bundle(dir.path(), opsboard_ingest::MAX_IMPORT_BYTES).unwrap();

    assert_eq!(value["meta"]["reportingPeriod"], json!("Week 18"));
    assert_eq!(
        value["meta"]["refreshGuidance"],
        json!("Export again from the planner, then import.")
    );

    let ops = &value["departments"][0];
    assert_eq!(ops["id"], json!("ops"));
    assert_eq!(ops["summary"], json!("Runs the floor, \"mostly\" smoothly"));
    assert_eq!(ops["metrics"].as_array().unwrap().len(), 2);
    assert_eq!(ops["metrics"][0]["value"], json!(99.5));
    assert_eq!(ops["metrics"][1]["value"], json!(1204));
    assert_eq!(ops["metrics"][0]["trend"]["label"], json!("+0.3"));
    assert_eq!(ops["trend"]["context"], json!("Weekly throughput"));
    assert_eq!(ops["trend"]["datapoints"][1]["value"], json!(14.5));
    assert_eq!(ops["projects"]["items"][0]["subtitle"], json!("Phase 2, east side"));
    assert_eq!(ops["highlights"]["items"], json!([]));

    let fin = &value["departments"][1];
    assert_eq!(fin["trend"]["datapoints"].as_array().unwrap().len(), 1);
    assert_eq!(fin["meetings"][0]["time"], json!("Thu 10:00"));

    assert!(value["theme"].is_null());
}

#[test]
fn csv_rows_for_unknown_departments_are_skipped() {
    let dir = operations_bundle();
    let value = read_csv_bundle(dir.path(), opsboard_ingest::MAX_IMPORT_BYTES).unwrap();

    let metric_labels: Vec<&str> = value["departments"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|dept| dept["metrics"].as_array().unwrap())
        .filter_map(|metric| metric["label"].as_str())
        .collect();
    assert!(!metric_labels.contains(&"Orphan"));
}

#[test]
fn csv_bundle_reads_optional_theme() {
    let dir = operations_bundle();
    write(
        dir.path(),
        "theme.json",
        r##"{"palette": {"background": "#101820"}}"##,
    );
    let value = read_csv_bundle(dir.path(), opsboard_ingest::MAX_IMPORT_BYTES).unwrap();
    assert_eq!(value["theme"]["palette"]["background"], json!("#101820"));
}

#[test]
fn csv_bundle_requires_meta_file() {
    let dir = operations_bundle();
    fs::remove_file(dir.path().join(META_FILE)).unwrap();

    let err = read_csv_bundle(dir.path(), opsboard_ingest::MAX_IMPORT_BYTES).unwrap_err();
    assert!(matches!(err, IngestError::MissingBundleFile { file, .. } if file == META_FILE));
}

#[test]
fn csv_bundle_requires_departments_file() {
    let dir = operations_bundle();
    fs::remove_file(dir.path().join(DEPARTMENTS_FILE)).unwrap();

    let err = read_csv_bundle(dir.path(), opsboard_ingest::MAX_IMPORT_BYTES).unwrap_err();
    assert!(err.to_string().contains("departments.csv"));
}

#[test]
fn csv_bundle_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = read_csv_bundle(&dir.path().join("nope"), opsboard_ingest::MAX_IMPORT_BYTES)
        .unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn csv_rows_skip_blank_lines_and_pad_short_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.csv");
    fs::write(&path, "\n\u{feff}id,name,summary\n\n a , b \nc\n").unwrap();

    let rows = read_csv_rows(&path, opsboard_ingest::MAX_IMPORT_BYTES).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("id"), Some("a"));
    assert_eq!(rows[0].get("name"), Some("b"));
    assert_eq!(rows[1].get("summary"), Some(""));
    assert_eq!(rows[1].non_empty("summary"), None);
    assert_eq!(rows[1].get("missing"), None);
}

#[test]
fn json_import_preserves_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dataset.json");
    fs::write(&path, r#"{"schemaVersion": 1, "meta": {}, "departments": []}"#).unwrap();

    let raw = load_raw_dataset(&path, &IngestOptions::default()).unwrap();
    assert_eq!(raw.format, ImportFormat::Json);
    assert_eq!(raw.value["schemaVersion"], json!(1));
}

#[test]
fn json_import_rejects_invalid_syntax() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"meta\": ").unwrap();

    let err = load_raw_dataset(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::JsonParse { .. }));
}

#[test]
fn json_import_enforces_size_guard() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.json");
    fs::write(&path, format!("{{\"padding\": \"{}\"}}", "x".repeat(256))).unwrap();

    let options = IngestOptions::new().with_max_file_bytes(64);
    let err = load_raw_dataset(&path, &options).unwrap_err();
    match err {
        IngestError::FileTooLarge { size, max_size, .. } => {
            assert!(size > 64);
            assert_eq!(max_size, 64);
        }
        other => panic!("expected FileTooLarge, got {other:?}"),
    }
}

#[test]
fn missing_json_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = load_raw_dataset(&dir.path().join("absent.json"), &IngestOptions::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn csv_bundle_sanitizes_into_dataset() {
    let dir = operations_bundle();
    let raw = load_raw_dataset(dir.path(), &IngestOptions::default()).unwrap();
    assert_eq!(raw.format, ImportFormat::Csv);

    let sanitized = sanitize(&raw.value).unwrap();
    let dataset = &sanitized.dataset;
    assert_eq!(dataset.departments.len(), 2);
    assert_eq!(dataset.meta.reporting_period, "Week 18");
    assert_eq!(dataset.departments[0].metrics[1].value, 1204.0);
    assert!(dataset.theme.is_none());

    assert_eq!(
        dataset.warnings,
        vec!["Dataset missing schemaVersion; assuming v1.".to_string()]
    );
}
