//! CSV export of generated links.
//!
//! Writes the same layout as the XLSX export in plain text, for spreadsheet
//! tools and pipelines that prefer CSV.

use csv::Writer;

use crate::compose::GeneratedLink;
use crate::error_handling::ExportError;

use super::sheet::{link_row, LINK_COLUMNS};

/// Serializes the links into CSV bytes with a fixed header row.
///
/// An empty list yields a header-only document.
///
/// # Errors
///
/// Returns `ExportError::Csv` when record serialization fails and
/// `ExportError::Io` when the underlying buffer write fails.
pub fn write_csv(links: &[GeneratedLink]) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(LINK_COLUMNS)?;
    for link in links {
        writer.write_record(link_row(link))?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(bytes)
}
