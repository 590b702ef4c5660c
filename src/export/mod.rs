//! Export functionality for generated links.
//!
//! This module serializes the in-memory link list into spreadsheet documents
//! (XLSX workbook or CSV) with a fixed six-column layout. Serializers return
//! bytes; writing those bytes somewhere is the sink's job.

mod csv;
mod sheet;
mod types;
mod xlsx;

pub use csv::write_csv;
pub use sheet::{link_row, LINK_COLUMNS};
pub use types::{ExportFormat, ExportOptions};
pub use xlsx::write_xlsx;
