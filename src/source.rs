//! Candidate URL list acquisition.
//!
//! The candidate list is a newline-separated text document, read either from
//! a local file or fetched over HTTP from a configured address. Lines are
//! trimmed; blank lines and `#` comments are skipped.
//!
//! The list is best-effort input: it is requested once per run with no retry,
//! and any failure downgrades to a warning and an empty list. Only explicit
//! URLs remain available in that case.

use log::{info, warn};

use crate::config::{Config, MAX_CANDIDATE_URLS, PRODUCT_LIST_ENV};
use crate::error_handling::{InitializationError, SourceFetchError};
use crate::initialization::init_client;

/// Parses candidate URLs out of a newline-separated document.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Order is preserved. Lists longer than [`MAX_CANDIDATE_URLS`] are truncated
/// with a warning.
pub fn parse_candidate_lines(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if urls.len() > MAX_CANDIDATE_URLS {
        warn!(
            "Candidate list has {} URLs; truncating to {}",
            urls.len(),
            MAX_CANDIDATE_URLS
        );
        urls.truncate(MAX_CANDIDATE_URLS);
    }

    urls
}

/// Fetches the candidate list from `address` with a single GET request.
///
/// There is deliberately no retry: the list is convenience input and a dead
/// endpoint should not stall the run.
///
/// # Errors
///
/// Returns `SourceFetchError::Request` when the request fails or the server
/// answers with a non-success status.
pub async fn fetch_candidates(
    client: &reqwest::Client,
    address: &str,
) -> Result<Vec<String>, SourceFetchError> {
    let response = client.get(address).send().await?.error_for_status()?;
    let text = response.text().await?;
    Ok(parse_candidate_lines(&text))
}

/// Reads the candidate list from a local file.
///
/// # Errors
///
/// Returns `SourceFetchError::Io` when the file cannot be read.
pub async fn read_candidate_file(
    path: &std::path::Path,
) -> Result<Vec<String>, SourceFetchError> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(parse_candidate_lines(&text))
}

/// Obtains the candidate list for a run, recovering from source failures.
///
/// Sources are tried in order: `--list-file`, `--list-url`, then the
/// `PRODUCT_LIST_URL` environment variable. When no source is configured or
/// the configured source fails, the run continues with an empty list. The
/// HTTP client is only built when an address actually has to be fetched.
///
/// # Errors
///
/// Returns `InitializationError` when a fetch is needed but the HTTP client
/// cannot be built. Failures of the source itself are not errors; they
/// downgrade to a warning and an empty list.
pub async fn load_candidates(config: &Config) -> Result<Vec<String>, InitializationError> {
    if let Some(path) = &config.list_file {
        return Ok(match read_candidate_file(path).await {
            Ok(urls) => {
                info!("Loaded {} candidate URL(s) from {}", urls.len(), path.display());
                urls
            }
            Err(e) => {
                warn!(
                    "Failed to read candidate list {}: {}. Continuing with an empty list.",
                    path.display(),
                    e
                );
                Vec::new()
            }
        });
    }

    let address = config
        .list_url
        .clone()
        .or_else(|| std::env::var(PRODUCT_LIST_ENV).ok());
    let Some(address) = address else {
        info!("No candidate list source configured; only an explicit URL can be decorated");
        return Ok(Vec::new());
    };

    // Only the fetching leg needs an HTTP client
    let client = init_client(config)?;
    Ok(match fetch_candidates(&client, &address).await {
        Ok(urls) => {
            info!("Fetched {} candidate URL(s) from {}", urls.len(), address);
            urls
        }
        Err(e) => {
            warn!(
                "Failed to fetch candidate list from {}: {}. Continuing with an empty list.",
                address, e
            );
            Vec::new()
        }
    })
}
