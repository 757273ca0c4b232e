//! CLI argument definitions for the generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tsdict",
    version,
    about = "Generate the front-end nutrition lookup module from the spreadsheet export",
    long_about = "Read the nutrition spreadsheet export (CSV), normalize product names into\n\
                  unique identifiers and write a TypeScript module with the option lists\n\
                  and the per-product nutrient table.\n\n\
                  With no arguments, reads data/dbtagged.csv and writes src/utils.ts."
)]
pub struct Cli {
    /// CSV export to read (default: data/dbtagged.csv).
    #[arg(long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// TypeScript module to write (default: src/utils.ts).
    #[arg(long, value_name = "TS")]
    pub output: Option<PathBuf>,

    /// TOML file overriding the column mapping, categories or missing-value markers.
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Run every stage but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
