//! UTM link composition.
//!
//! This module builds decorated URLs by appending the four campaign
//! parameters to a base URL. The query string is serialized with
//! `url::form_urlencoded`, so values are percent-encoded and spaces become
//! `+`, matching what browsers produce for form data.
//!
//! Composition is a pure string operation. The base URL is never parsed or
//! validated; whatever the caller passes in comes back with the parameters
//! appended. Existing query parameters are left untouched, including any
//! `utm_*` values already present.

use strum::IntoEnumIterator;
use url::form_urlencoded;

use crate::params::{UtmField, UtmParams};

/// A product URL decorated with campaign parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    /// The URL exactly as supplied by the caller or the candidate list.
    pub original_url: String,
    /// The original URL with the UTM query string appended.
    pub utm_url: String,
    /// The parameter values used to build `utm_url`.
    pub params: UtmParams,
}

/// Appends the four UTM parameters to `url`.
///
/// Parameters are appended in a fixed order (`utm_source`, `utm_medium`,
/// `utm_campaign`, `utm_content`), joined to the base URL with `?` when the
/// URL has no query string yet and `&` otherwise. Empty values are still
/// appended as empty assignments (`utm_source=`).
///
/// # Examples
///
/// ```
/// use utm_links::{compose_utm_url, UtmParams};
///
/// let params = UtmParams {
///     source: "google".into(),
///     medium: "cpc".into(),
///     campaign: "black_friday_2025".into(),
///     content: "banner_promo".into(),
/// };
/// let url = compose_utm_url("https://loja.freecook.com.br/fritadeira-af500", &params);
/// assert_eq!(
///     url,
///     "https://loja.freecook.com.br/fritadeira-af500\
///      ?utm_source=google&utm_medium=cpc&utm_campaign=black_friday_2025&utm_content=banner_promo"
/// );
/// ```
pub fn compose_utm_url(url: &str, params: &UtmParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for field in UtmField::iter() {
        serializer.append_pair(field.as_str(), params.get(field));
    }
    let query = serializer.finish();

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

/// Decorates a batch of URLs with the same parameter set.
///
/// A non-empty `explicit` URL takes precedence and yields exactly one link;
/// otherwise every candidate is decorated, preserving the candidate order.
/// An empty candidate list (with no explicit URL) yields an empty batch.
pub fn generate_links(
    explicit: Option<&str>,
    candidates: &[String],
    params: &UtmParams,
) -> Vec<GeneratedLink> {
    match explicit {
        Some(url) => vec![make_link(url, params)],
        None => candidates.iter().map(|url| make_link(url, params)).collect(),
    }
}

fn make_link(url: &str, params: &UtmParams) -> GeneratedLink {
    GeneratedLink {
        original_url: url.to_string(),
        utm_url: compose_utm_url(url, params),
        params: params.clone(),
    }
}
