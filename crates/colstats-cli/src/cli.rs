//! CLI argument definitions for colstats.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use colstats_cli::ViewMode;
use colstats_cli::settings::parse_date_hint;

#[derive(Parser)]
#[command(
    name = "colstats",
    version,
    about = "Describe the columns of a CSV file",
    long_about = "Load delimited text files and show per-column statistics \
                  (length, nulls, distinct values, min, median, mean, max) \
                  as a table and as pretty-printed JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (TOML) with date columns, display, and engine options.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Treat a column as dates in the given chrono format (repeatable).
    ///
    /// Example: --date-col date=%Y-%m-%d
    #[arg(
        long = "date-col",
        value_name = "NAME=FORMAT",
        value_parser = parse_date_hint,
        global = true
    )]
    pub date_cols: Vec<(String, String)>,

    /// Field separator (overrides the settings file).
    #[arg(long = "separator", value_name = "CHAR", global = true)]
    pub separator: Option<char>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Describe each file in turn.
    Show(ShowArgs),

    /// Read file paths from stdin; each line replaces the current file.
    Watch(DisplayArgs),

    /// Print the number of data rows in a file.
    Rows(RowsArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Delimited text files to describe.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Args)]
pub struct DisplayArgs {
    /// Which output to print.
    #[arg(long = "view", value_enum)]
    pub view: Option<ViewMode>,

    /// Maximum table width in columns.
    #[arg(long = "width", value_name = "COLUMNS")]
    pub width: Option<u16>,
}

#[derive(Args)]
pub struct RowsArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
