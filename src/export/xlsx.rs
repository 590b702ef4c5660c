//! XLSX export of generated links.
//!
//! Produces an Excel workbook with a single sheet named after
//! [`LINK_SHEET_NAME`](crate::config::LINK_SHEET_NAME): a header row plus one
//! row per link. All cells are written as strings; the URLs and parameter
//! values are opaque text, not numbers or formulas.

use rust_xlsxwriter::Workbook;

use crate::compose::GeneratedLink;
use crate::config::LINK_SHEET_NAME;
use crate::error_handling::ExportError;

use super::sheet::{link_row, LINK_COLUMNS};

/// Serializes the links into XLSX workbook bytes.
///
/// An empty list still yields a valid workbook containing only the header
/// row.
///
/// # Errors
///
/// Returns `ExportError::Xlsx` when workbook serialization fails.
pub fn write_xlsx(links: &[GeneratedLink]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(LINK_SHEET_NAME)?;

    for (col, label) in LINK_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *label)?;
    }

    for (row, link) in links.iter().enumerate() {
        for (col, value) in link_row(link).iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}
