//! Output boundary abstraction.
//!
//! Generated links leave the program two ways: individual links are handed to
//! the user (the CLI prints them, the way a clipboard copy would surface
//! them elsewhere), and export documents are persisted as files. [`Sink`]
//! isolates both effects so the generation flow can run against an in-memory
//! implementation in tests.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error_handling::ExportError;

/// Destination for generated links and export documents.
pub trait Sink {
    /// Hands one generated link to the user.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` when the hand-off fails. Callers treat this as
    /// non-fatal; one unreadable link should not abort the batch.
    fn copy_text(&self, text: &str) -> io::Result<()>;

    /// Persists an export document under `name`, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when the document cannot be written. This
    /// failure is always surfaced to the caller.
    fn write_document(&self, name: &Path, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Production sink: links go to stdout, documents to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSink;

impl Sink for LocalSink {
    fn copy_text(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")
    }

    fn write_document(&self, name: &Path, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        std::fs::write(name, bytes)?;
        Ok(name.to_path_buf())
    }
}

/// Capture-only sink for tests and dry runs.
///
/// Records everything it is given and never touches stdout or the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    copied: Mutex<Vec<String>>,
    documents: Mutex<Vec<(PathBuf, Vec<u8>)>>,
}

impl MemorySink {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All link texts handed off so far, in order.
    pub fn copied(&self) -> Vec<String> {
        self.copied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All documents written so far, as `(name, bytes)` pairs.
    pub fn documents(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Sink for MemorySink {
    fn copy_text(&self, text: &str) -> io::Result<()> {
        self.copied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }

    fn write_document(&self, name: &Path, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((name.to_path_buf(), bytes.to_vec()));
        Ok(name.to_path_buf())
    }
}
