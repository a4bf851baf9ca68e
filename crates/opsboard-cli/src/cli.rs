//! CLI argument definitions for the operations dashboard tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use opsboard_ingest::ImportFormat;

#[derive(Parser)]
#[command(
    name = "opsboard",
    version,
    about = "Offline operations dashboard - import and sanitize department datasets",
    long_about = "Import offline department datasets for the operations dashboard.\n\n\
                  Reads a JSON document or a directory of CSV files, repairs every\n\
                  defect it can with fallback values, and reports what it changed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sanitize a dataset and write the normalized document.
    Import(ImportArgs),

    /// Sanitize a dataset and print a summary without writing anything.
    Check(CheckArgs),

    /// List the supported theme tokens and their CSS variables.
    Tokens,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// JSON dataset file or CSV bundle directory.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (default: detected from the path).
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// Output file (default: dataset.json next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the normalized document instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON dataset file or CSV bundle directory.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (default: detected from the path).
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ImportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ImportFormat::Json,
            FormatArg::Csv => ImportFormat::Csv,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
