//! CLI argument definitions for the roster normalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{CanonicalField, DEFAULT_REQUIRED};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Extract and normalize contact columns from a CSV or Excel file",
    long_about = "Extract and normalize contact columns from a CSV or Excel file.\n\n\
                  Column headers are matched against known spellings of id, firstName,\n\
                  lastName, phoneNumber, countryCode and displayName. Rows with an\n\
                  invalid phone number or country code are dropped with a warning."
)]
pub struct Cli {
    /// Path to the input file (.csv, .xls or .xlsx).
    #[arg(value_name = "FILE_PATH")]
    pub file_path: PathBuf,

    /// Canonical fields the input file must provide.
    #[arg(
        long = "columns",
        value_name = "FIELD",
        num_args = 1..,
        default_values_t = DEFAULT_REQUIRED.to_vec()
    )]
    pub columns: Vec<CanonicalField>,

    /// How to print the normalized records.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

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

    /// Include row values (names, phone numbers) in log messages.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
