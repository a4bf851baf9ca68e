use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use opsboard_cli::display::{format_value, pluralize, warning_digest};
use opsboard_model::{Dataset, Department, ThemeGroup};

use crate::types::ImportResult;

pub fn print_import_summary(result: &ImportResult) {
    println!("Input: {} ({})", result.input.display(), result.format);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    println!(
        "Imported {}.",
        pluralize(result.dataset.departments.len(), "department")
    );
    print_warnings(&result.dataset.warnings);
}

pub fn print_check_summary(result: &ImportResult) {
    let dataset = &result.dataset;
    println!("Input: {} ({})", result.input.display(), result.format);
    print_meta(dataset);
    println!("{}", department_table(&dataset.departments));
    print_warning_digest(&dataset.warnings);
}

fn print_meta(dataset: &Dataset) {
    let meta = &dataset.meta;
    println!("Reporting period: {}", meta.reporting_period);
    println!("Last updated: {}", meta.last_updated);
    println!("Refresh: {}", meta.refresh_guidance);
    match &dataset.theme {
        Some(theme) => {
            let groups: Vec<&str> = theme
                .source
                .supplied_groups()
                .map(ThemeGroup::key)
                .collect();
            println!(
                "Theme: {} ({})",
                pluralize(theme.css_variables.len(), "CSS override"),
                groups.join(", ")
            );
        }
        None => println!("Theme: default styling"),
    }
}

fn department_table(departments: &[Department]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Department"),
        header_cell("Metrics"),
        header_cell("Trend"),
        header_cell("Projects"),
        header_cell("Highlights"),
        header_cell("Meetings"),
        header_cell("Headline"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for department in departments {
        table.add_row(vec![
            Cell::new(&department.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&department.name),
            count_cell(department.metrics.len()),
            trend_cell(department.trend.datapoints.len()),
            count_cell(department.projects.items.len()),
            count_cell(department.highlights.items.len()),
            count_cell(department.meetings.len()),
            headline_cell(department),
        ]);
    }
    table
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        println!("No warnings.");
        return;
    }
    println!("Warnings ({}):", warnings.len());
    for warning in warnings {
        println!("- {warning}");
    }
}

fn print_warning_digest(warnings: &[String]) {
    if warnings.is_empty() {
        println!("No warnings.");
        return;
    }
    println!("Warnings ({}):", warnings.len());
    for line in warning_digest(warnings) {
        println!("- {line}");
    }
}

/// First metric as `label: value+suffix`, e.g. `Uptime: 99.5%`.
fn headline_cell(department: &Department) -> Cell {
    match department.metrics.first() {
        Some(metric) => Cell::new(format!(
            "{}: {}{}",
            metric.label,
            format_value(metric.value),
            metric.suffix
        )),
        None => dim_cell("-"),
    }
}

fn trend_cell(points: usize) -> Cell {
    if points == 0 {
        Cell::new("No data").fg(Color::Yellow)
    } else {
        Cell::new(points)
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
