//! Tests for the summary text helpers.

use insta::assert_snapshot;
use opsboard_cli::display::{WARNING_PREVIEW_LIMIT, format_value, warning_digest};

fn numbered(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("warning {n}")).collect()
}

#[test]
fn digest_shows_everything_up_to_the_limit() {
    let warnings = numbered(WARNING_PREVIEW_LIMIT);
    assert_eq!(warning_digest(&warnings), warnings);
}

#[test]
fn digest_reports_overflow() {
    let digest = warning_digest(&numbered(12));
    assert_snapshot!(digest.join("\n"), @r"
    warning 1
    warning 2
    warning 3
    warning 4
    warning 5
    ...and 7 more warning(s).
    ");
}

#[test]
fn digest_of_nothing_is_empty() {
    assert!(warning_digest(&[]).is_empty());
}

#[test]
fn metric_values_match_dashboard_formatting() {
    let rendered: Vec<String> = [0.0, 7.0, 42.25, 999.0, 1000.0, 1204.0, 18_950.46, 2_500_000.0]
        .into_iter()
        .map(format_value)
        .collect();
    assert_eq!(
        rendered,
        ["0", "7", "42.3", "999", "1,000", "1,204", "18,950.5", "2,500,000"]
    );
}

#[test]
fn non_finite_values_render_as_zero() {
    assert_eq!(format_value(f64::NAN), "0");
    assert_eq!(format_value(f64::INFINITY), "0");
}

#[test]
fn very_large_values_keep_every_digit() {
    assert_eq!(format_value(1e20), "100,000,000,000,000,000,000");
    assert_eq!(format_value(5e18), "5,000,000,000,000,000,000");
    assert_eq!(format_value(-1e20), "-100000000000000000000");
    assert_eq!(format_value(1_234_567_890_123.46), "1,234,567,890,123.5");
}
