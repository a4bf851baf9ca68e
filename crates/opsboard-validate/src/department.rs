//! Department assembly and the per-entity list builders.
//!
//! Entries that are not objects are replaced wholesale and reported with
//! their index. Fields inside an object entry fall back silently, and unknown
//! keys inside individual entries are not reported.

use serde_json::Value;

use opsboard_model::limits::{MAX_LIST_ITEMS, MAX_MEETINGS, MAX_METRICS, MAX_TREND_POINTS};
use opsboard_model::{
    Department, ListItem, Meeting, Metric, MetricTrend, Section, Trend, TrendPoint,
};

use crate::coerce::{
    as_object, coerce_number, coerce_string, limit_array, warn_unknown_fields,
};
use crate::warning::{SanitizeWarning, Warnings};

const DEPARTMENT_FIELDS: &[&str] = &[
    "id",
    "name",
    "summary",
    "metrics",
    "trend",
    "projects",
    "highlights",
    "meetings",
];
const SECTION_FIELDS: &[&str] = &["context", "items"];
const TREND_FIELDS: &[&str] = &["context", "datapoints"];

pub(crate) fn sanitize_department(raw: &Value, index: usize, warnings: &mut Warnings) -> Department {
    let Some(source) = raw.as_object() else {
        warnings.push(SanitizeWarning::DepartmentNotObject { index });
        return Department::placeholder(index);
    };

    let id = coerce_string(source.get("id"), &Department::fallback_id(index));
    let name = coerce_string(source.get("name"), &Department::fallback_name(index));

    warn_unknown_fields(source, DEPARTMENT_FIELDS, &id, warnings);
    if let Some(projects) = as_object(source.get("projects")) {
        warn_unknown_fields(projects, SECTION_FIELDS, &format!("{id}.projects"), warnings);
    }
    if let Some(highlights) = as_object(source.get("highlights")) {
        warn_unknown_fields(
            highlights,
            SECTION_FIELDS,
            &format!("{id}.highlights"),
            warnings,
        );
    }

    let summary = coerce_string(source.get("summary"), "");
    let metrics = build_metrics(source.get("metrics"), &format!("{id}.metrics"), warnings);
    let trend = build_trend(source.get("trend"), &format!("{id}.trend"), warnings);
    let projects = build_section(source.get("projects"), &format!("{id}.projects"), warnings);
    let highlights = build_section(
        source.get("highlights"),
        &format!("{id}.highlights"),
        warnings,
    );
    let meetings = build_meetings(source.get("meetings"), &format!("{id}.meetings"), warnings);

    Department {
        id,
        name,
        summary,
        metrics,
        trend,
        projects,
        highlights,
        meetings,
    }
}

fn build_metrics(raw: Option<&Value>, path: &str, warnings: &mut Warnings) -> Vec<Metric> {
    let entries = limit_array(raw, MAX_METRICS, path, warnings);
    let mut metrics = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(item) = entry.as_object() else {
            warnings.push(not_an_object(path, index, "metric"));
            metrics.push(Metric::unavailable());
            continue;
        };
        let trend = as_object(item.get("trend"));
        metrics.push(Metric {
            label: coerce_string(item.get("label"), &Metric::fallback_label(index)),
            value: coerce_number(item.get("value"), 0.0),
            suffix: coerce_string(item.get("suffix"), ""),
            trend: MetricTrend {
                label: coerce_string(trend.and_then(|trend| trend.get("label")), ""),
                description: coerce_string(trend.and_then(|trend| trend.get("description")), ""),
            },
        });
    }
    metrics
}

fn build_trend(raw: Option<&Value>, path: &str, warnings: &mut Warnings) -> Trend {
    let source = as_object(raw);
    if let Some(source) = source {
        warn_unknown_fields(source, TREND_FIELDS, path, warnings);
    }

    let points_path = format!("{path}.datapoints");
    let entries = limit_array(
        source.and_then(|source| source.get("datapoints")),
        MAX_TREND_POINTS,
        &points_path,
        warnings,
    );
    let mut datapoints = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(point) = entry.as_object() else {
            warnings.push(not_an_object(&points_path, index, "value"));
            datapoints.push(TrendPoint::unavailable(index));
            continue;
        };
        datapoints.push(TrendPoint {
            label: coerce_string(point.get("label"), &TrendPoint::fallback_label(index)),
            value: coerce_number(point.get("value"), 0.0),
        });
    }

    if datapoints.is_empty() {
        warnings.push(SanitizeWarning::EmptyTrend {
            path: path.to_string(),
        });
    }

    Trend {
        context: coerce_string(source.and_then(|source| source.get("context")), ""),
        datapoints,
    }
}

fn build_section(raw: Option<&Value>, path: &str, warnings: &mut Warnings) -> Section {
    let source = as_object(raw);
    Section {
        context: coerce_string(source.and_then(|source| source.get("context")), ""),
        items: build_list_items(
            source.and_then(|source| source.get("items")),
            &format!("{path}.items"),
            warnings,
        ),
    }
}

fn build_list_items(raw: Option<&Value>, path: &str, warnings: &mut Warnings) -> Vec<ListItem> {
    let entries = limit_array(raw, MAX_LIST_ITEMS, path, warnings);
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(item) = entry.as_object() else {
            warnings.push(not_an_object(path, index, "copy"));
            items.push(ListItem::unavailable());
            continue;
        };
        items.push(ListItem {
            title: coerce_string(item.get("title"), ListItem::TITLE_FALLBACK),
            subtitle: coerce_string(item.get("subtitle"), ListItem::SUBTITLE_FALLBACK),
            meta: coerce_string(item.get("meta"), ""),
        });
    }
    items
}

fn build_meetings(raw: Option<&Value>, path: &str, warnings: &mut Warnings) -> Vec<Meeting> {
    let entries = limit_array(raw, MAX_MEETINGS, path, warnings);
    let mut meetings = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(item) = entry.as_object() else {
            warnings.push(not_an_object(path, index, "meeting"));
            meetings.push(Meeting::unavailable());
            continue;
        };
        meetings.push(Meeting {
            title: coerce_string(item.get("title"), Meeting::TITLE_FALLBACK),
            description: coerce_string(item.get("description"), Meeting::DESCRIPTION_FALLBACK),
            time: coerce_string(item.get("time"), Meeting::TIME_FALLBACK),
        });
    }
    meetings
}

fn not_an_object(path: &str, index: usize, replacement: &'static str) -> SanitizeWarning {
    SanitizeWarning::EntryNotObject {
        path: path.to_string(),
        index,
        replacement,
    }
}
