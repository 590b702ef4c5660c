//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//!
//! The two operational failure modes are handled differently:
//! - `SourceFetchError`: the candidate list could not be obtained. Recovered
//!   close to the call site; the run continues with an empty list.
//! - `ExportError`: the export document could not be produced or written.
//!   Always surfaced to the caller.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error obtaining the candidate URL list.
#[derive(Error, Debug)]
pub enum SourceFetchError {
    /// The HTTP request failed (connect, timeout, or a non-success status).
    #[error("Candidate list request failed: {0}")]
    Request(#[from] ReqwestError),

    /// A local candidate list file could not be read.
    #[error("Candidate list file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error producing or writing an export document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Workbook serialization failed.
    #[error("Workbook serialization error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV serialization failed.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// The document could not be written out.
    #[error("Export write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading the parameter vocabulary file.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The vocabulary file could not be read.
    #[error("Vocabulary file error: {0}")]
    Io(#[from] std::io::Error),

    /// The vocabulary file is not valid TOML.
    #[error("Invalid vocabulary file: {0}")]
    Parse(#[from] toml::de::Error),
}
