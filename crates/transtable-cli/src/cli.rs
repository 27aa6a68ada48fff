//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;
use transtable_cli::logging::LogFormat;
use transtable_core::PageSize;

#[derive(Parser)]
#[command(
    name = "transtable",
    version,
    about = "Browse, compare and export translation tables",
    long_about = "Browse, compare and export translation tables.\n\n\
                  Documents are JSON objects of sections, each mapping keys to texts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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

    /// Include row texts in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with store options (page_size, select_all_scope, ...).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the JSON documents in a directory.
    Files {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Show one page of a document.
    Show(ShowArgs),

    /// Compare two documents entry by entry.
    Compare {
        #[arg(value_name = "FILE1")]
        left: PathBuf,
        #[arg(value_name = "FILE2")]
        right: PathBuf,
    },

    /// Export matching rows into another document, optionally translated.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Document holding the source texts shown as reference.
    #[arg(long = "reference", value_name = "FILE")]
    pub reference: Option<PathBuf>,

    /// Case-insensitive search over section, key, value and reference.
    #[arg(long = "query", short = 'q')]
    pub query: Option<String>,

    /// Page to show (1-based, clamped).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides the config file).
    #[arg(long = "page-size")]
    pub page_size: Option<PageSize>,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Document to write. The file is replaced by the exported rows; entries
    /// already present keep their order.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Document holding the source texts, carried as reference.
    #[arg(long = "reference", value_name = "FILE")]
    pub reference: Option<PathBuf>,

    /// Export only rows matching this search.
    #[arg(long = "query", short = 'q')]
    pub query: Option<String>,

    /// Translate exported rows into this language.
    #[arg(long = "target", requires = "dictionary")]
    pub target: Option<String>,

    /// Source language (default: the input file name, e.g. en.json -> en).
    #[arg(long = "source", requires = "target")]
    pub source: Option<String>,

    /// JSON phrase table used for translation.
    #[arg(long = "dictionary", value_name = "FILE", requires = "target")]
    pub dictionary: Option<PathBuf>,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
