//! Text formatting shared by the summary output.

/// Number of warnings shown before the overflow notice.
pub const WARNING_PREVIEW_LIMIT: usize = 5;

/// Above this magnitude an `f64` has no fractional precision left to round.
const FRACTION_LIMIT: f64 = 1e15;

/// Formats a metric value the way the dashboard shows it.
///
/// Integers from 1000 up get thousands separators, other integers are
/// printed as-is, and fractional values keep at most one fractional digit.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value < 1000.0 {
        return format!("{value:.0}");
    }
    let magnitude = value.abs();
    let magnitude = if magnitude < FRACTION_LIMIT {
        (magnitude * 10.0).round() / 10.0
    } else {
        magnitude
    };
    let rendered = format!("{magnitude:.1}");
    let (whole, tenths) = rendered.split_once('.').unwrap_or((&rendered, "0"));

    let mut out = String::new();
    if value < 0.0 && rendered != "0.0" {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if tenths != "0" {
        out.push('.');
        out.push_str(tenths);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < 4 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// The first [`WARNING_PREVIEW_LIMIT`] warnings, followed by an overflow
/// notice when there are more.
pub fn warning_digest(warnings: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = warnings
        .iter()
        .take(WARNING_PREVIEW_LIMIT)
        .cloned()
        .collect();
    let hidden = warnings.len().saturating_sub(WARNING_PREVIEW_LIMIT);
    if hidden > 0 {
        lines.push(format!("...and {hidden} more warning(s)."));
    }
    lines
}

/// `"1 department"` / `"3 departments"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
