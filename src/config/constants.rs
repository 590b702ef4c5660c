//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: default file naming, fetch limits, and environment lookups.

/// Environment variable holding the address of the candidate URL list.
///
/// Used as a fallback when `--list-url` is not given. Can be set in a `.env`
/// file next to the binary or in the working directory.
pub const PRODUCT_LIST_ENV: &str = "PRODUCT_LIST_URL";

/// Brand slug used in the default export file name.
pub const DEFAULT_BRAND: &str = "freecook";

/// Prefix of the default export file name (`links_utm_<brand>.<ext>`).
pub const EXPORT_FILE_PREFIX: &str = "links_utm_";

/// Name of the single sheet in the exported workbook.
pub const LINK_SHEET_NAME: &str = "Links UTM";

/// Default timeout for the candidate list fetch, in seconds.
///
/// The list is fetched once per run with no retry, so a short timeout keeps
/// a dead endpoint from stalling the whole run.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Maximum number of candidate URLs taken from a list.
///
/// Lists longer than this are truncated with a warning. The cap bounds both
/// memory use and the size of the exported spreadsheet.
pub const MAX_CANDIDATE_URLS: usize = 10_000;

/// User-Agent header sent with the candidate list fetch.
pub const DEFAULT_USER_AGENT: &str = concat!("utm_links/", env!("CARGO_PKG_VERSION"));
