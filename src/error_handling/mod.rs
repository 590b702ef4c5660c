//! Error handling.
//!
//! This module defines the error types for the two operational failure modes
//! (candidate list fetch, export writing) plus initialization and vocabulary
//! loading failures. Fetch errors are recovered near the call site; export
//! errors always propagate to the caller.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, SourceFetchError, VocabularyError};
