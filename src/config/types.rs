//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BRAND, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Doubles as the CLI argument parser for the binary and as a plain struct
/// for programmatic use. Field docs are the `--help` text.
///
/// # Examples
///
/// ```no_run
/// use utm_links::Config;
///
/// let config = Config {
///     url: Some("https://loja.freecook.com.br/fritadeira-af500".into()),
///     export: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "utm_links",
    version,
    about = "Decorates product URLs with UTM campaign parameters and exports the links to a spreadsheet"
)]
pub struct Config {
    /// Product URL to decorate; when omitted, the whole candidate list is used
    pub url: Option<String>,

    /// utm_source value (defaults to the first vocabulary entry)
    #[arg(long)]
    pub source: Option<String>,

    /// utm_medium value (defaults to the first vocabulary entry)
    #[arg(long)]
    pub medium: Option<String>,

    /// utm_campaign value (defaults to the first vocabulary entry)
    #[arg(long)]
    pub campaign: Option<String>,

    /// utm_content value (defaults to the first vocabulary entry)
    #[arg(long)]
    pub content: Option<String>,

    /// Address of the newline-separated candidate URL list
    /// (falls back to the PRODUCT_LIST_URL environment variable)
    #[arg(long)]
    pub list_url: Option<String>,

    /// Local file with candidate URLs, one per line
    #[arg(long)]
    pub list_file: Option<PathBuf>,

    /// TOML file with the allowed values for each parameter field
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Brand slug used in the default export file name
    #[arg(long, default_value = DEFAULT_BRAND)]
    pub brand: String,

    /// Write the generated links to a spreadsheet
    #[arg(long)]
    pub export: bool,

    /// Output file path for the export (implies --export)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// Print the allowed parameter values and exit
    #[arg(long)]
    pub show_vocabulary: bool,

    /// Candidate list fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header for the candidate list fetch
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            source: None,
            medium: None,
            campaign: None,
            content: None,
            list_url: None,
            list_file: None,
            vocabulary: None,
            brand: DEFAULT_BRAND.to_string(),
            export: false,
            output: None,
            format: ExportFormat::Xlsx,
            show_vocabulary: false,
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
