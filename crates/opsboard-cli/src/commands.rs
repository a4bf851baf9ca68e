use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use opsboard_ingest::{ImportFormat, IngestOptions, load_raw_dataset};
use opsboard_model::{DatasetDocument, THEME_TOKENS};
use opsboard_validate::sanitize;

use crate::cli::{CheckArgs, FormatArg, ImportArgs};
use crate::summary::apply_table_style;
use crate::types::ImportResult;

const DEFAULT_OUTPUT_NAME: &str = "dataset.json";
const FALLBACK_OUTPUT_NAME: &str = "dataset.sanitized.json";

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let span = info_span!("import", input = %args.input.display());
    let _guard = span.enter();

    let mut result = load_and_sanitize(&args.input, args.format)?;
    let document = DatasetDocument::from(&result.dataset);
    let rendered =
        serde_json::to_string_pretty(&document).context("serialize normalized dataset")?;

    if args.dry_run {
        println!("{rendered}");
        info!("dry run; nothing written");
        return Ok(result);
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, result.format));
    std::fs::write(&output, format!("{rendered}\n"))
        .with_context(|| format!("write {}", output.display()))?;
    info!(output = %output.display(), "normalized dataset written");
    result.output = Some(output);
    Ok(result)
}

pub fn run_check(args: &CheckArgs) -> Result<ImportResult> {
    let span = info_span!("check", input = %args.input.display());
    let _guard = span.enter();
    load_and_sanitize(&args.input, args.format)
}

pub fn run_tokens() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Group", "Token", "CSS variable"]);
    apply_table_style(&mut table);
    for token in THEME_TOKENS {
        table.add_row(vec![token.group.key(), token.key, token.variable]);
    }
    println!("{table}");
    Ok(())
}

fn load_and_sanitize(input: &Path, format: Option<FormatArg>) -> Result<ImportResult> {
    let options = IngestOptions::new().with_format(format.map(ImportFormat::from));
    let raw = load_raw_dataset(input, &options)
        .with_context(|| format!("load dataset from {}", input.display()))?;
    let sanitized = sanitize(&raw.value)
        .with_context(|| format!("sanitize dataset from {}", input.display()))?;

    let dataset = sanitized.dataset;
    if dataset.has_warnings() {
        warn!(
            warning_count = dataset.warnings.len(),
            "dataset needed repairs"
        );
    }
    info!(
        format = %raw.format,
        department_count = dataset.departments.len(),
        "dataset sanitized"
    );
    Ok(ImportResult {
        input: input.to_path_buf(),
        format: raw.format,
        output: None,
        dataset,
    })
}

/// `dataset.json` inside a CSV bundle directory, or next to a JSON input.
/// A JSON input already named `dataset.json` is never overwritten.
fn default_output_path(input: &Path, format: ImportFormat) -> PathBuf {
    match format {
        ImportFormat::Csv => input.join(DEFAULT_OUTPUT_NAME),
        ImportFormat::Json => {
            let candidate = input.with_file_name(DEFAULT_OUTPUT_NAME);
            if candidate == input {
                input.with_file_name(FALLBACK_OUTPUT_NAME)
            } else {
                candidate
            }
        }
    }
}
