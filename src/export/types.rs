//! Export types and options.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::{DEFAULT_BRAND, EXPORT_FILE_PREFIX};

/// Supported export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook with a single sheet
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Options controlling where and how links are exported.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Export format.
    pub format: ExportFormat,
    /// Output file path; `None` selects the default name.
    pub output: Option<PathBuf>,
    /// Brand slug used in the default file name.
    pub brand: String,
}

impl ExportOptions {
    /// Resolves the output path.
    ///
    /// An explicit output path wins unchanged. Otherwise the default name
    /// `links_utm_<brand>.<ext>` is used, with the brand lowercased and
    /// reduced to `[a-z0-9_-]`.
    pub fn file_name(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "{EXPORT_FILE_PREFIX}{}.{}",
                sanitize_brand(&self.brand),
                self.format.extension()
            )),
        }
    }
}

fn sanitize_brand(brand: &str) -> String {
    let sanitized: String = brand
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        DEFAULT_BRAND.to_string()
    } else {
        sanitized
    }
}
