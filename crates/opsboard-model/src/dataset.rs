use serde::{Deserialize, Serialize};

use crate::limits::{LAST_UPDATED_FALLBACK, REFRESH_GUIDANCE_FALLBACK, REPORTING_PERIOD_FALLBACK};
use crate::theme::Theme;

/// A sanitized dashboard dataset.
///
/// `departments` is never empty and every collection respects the caps in
/// [`crate::limits`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// `schemaVersion` as declared by the input, when it was an integer.
    pub schema_version_declared: Option<i64>,
    pub meta: Meta,
    pub departments: Vec<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Human-readable data quality warnings, in discovery order.
    pub warnings: Vec<String>,
}

impl Dataset {
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub reporting_period: String,
    pub last_updated: String,
    pub refresh_guidance: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            reporting_period: REPORTING_PERIOD_FALLBACK.to_string(),
            last_updated: LAST_UPDATED_FALLBACK.to_string(),
            refresh_guidance: REFRESH_GUIDANCE_FALLBACK.to_string(),
        }
    }
}

/// One organizational unit and everything rendered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub metrics: Vec<Metric>,
    pub trend: Trend,
    pub projects: Section,
    pub highlights: Section,
    pub meetings: Vec<Meeting>,
}

impl Department {
    /// Fallback id for the department at a zero-based position.
    pub fn fallback_id(index: usize) -> String {
        format!("dept-{}", index + 1)
    }

    /// Fallback display name for the department at a zero-based position.
    pub fn fallback_name(index: usize) -> String {
        format!("Department {}", index + 1)
    }

    /// A department with fallback naming and empty collections.
    pub fn placeholder(index: usize) -> Self {
        Self {
            id: Self::fallback_id(index),
            name: Self::fallback_name(index),
            summary: String::new(),
            metrics: Vec::new(),
            trend: Trend::default(),
            projects: Section::default(),
            highlights: Section::default(),
            meetings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: f64,
    pub suffix: String,
    pub trend: MetricTrend,
}

impl Metric {
    pub fn fallback_label(index: usize) -> String {
        format!("Metric {}", index + 1)
    }

    /// Replacement for an entry that was not an object at all.
    pub fn unavailable() -> Self {
        Self {
            label: "Metric".to_string(),
            value: 0.0,
            suffix: String::new(),
            trend: MetricTrend::default(),
        }
    }
}

/// Short change indicator shown under a metric (e.g. "↑ 4").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTrend {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub context: String,
    pub datapoints: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

impl TrendPoint {
    pub fn fallback_label(index: usize) -> String {
        format!("Point {}", index + 1)
    }

    pub fn unavailable(index: usize) -> Self {
        Self {
            label: Self::fallback_label(index),
            value: 0.0,
        }
    }
}

/// A titled list: projects or highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub context: String,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub title: String,
    pub subtitle: String,
    pub meta: String,
}

impl ListItem {
    pub const TITLE_FALLBACK: &'static str = "Untitled";
    pub const SUBTITLE_FALLBACK: &'static str = "Details pending.";

    pub fn unavailable() -> Self {
        Self {
            title: "Unavailable".to_string(),
            subtitle: "Item data could not be loaded.".to_string(),
            meta: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
    pub description: String,
    pub time: String,
}

impl Meeting {
    pub const TITLE_FALLBACK: &'static str = "TBD";
    pub const DESCRIPTION_FALLBACK: &'static str = "Details forthcoming.";
    pub const TIME_FALLBACK: &'static str = "Schedule pending";

    pub fn unavailable() -> Self {
        Self {
            title: Self::TITLE_FALLBACK.to_string(),
            description: "Meeting details unavailable.".to_string(),
            time: String::new(),
        }
    }
}
