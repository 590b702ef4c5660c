//! Link generation session state.
//!
//! A [`Session`] carries the state of one interactive workflow: the chosen
//! parameter values, an optional explicit URL, the candidate list, and the
//! links produced by the last generation. All transitions are plain state
//! changes with no IO, so the whole workflow is testable without a network
//! or filesystem.

use crate::compose::{generate_links, GeneratedLink};
use crate::config::Vocabulary;
use crate::params::{UtmField, UtmParams};

/// Mutable state for one link generation session.
#[derive(Debug, Clone)]
pub struct Session {
    vocabulary: Vocabulary,
    candidates: Vec<String>,
    search_url: String,
    params: UtmParams,
    links: Vec<GeneratedLink>,
}

impl Session {
    /// Creates a session over the given vocabulary and candidate URLs.
    ///
    /// Parameters start at the first value of each vocabulary field.
    pub fn new(vocabulary: Vocabulary, candidates: Vec<String>) -> Self {
        let params = vocabulary.default_params();
        Self {
            vocabulary,
            candidates,
            search_url: String::new(),
            params,
            links: Vec::new(),
        }
    }

    /// Sets one campaign parameter field.
    ///
    /// Values are opaque; nothing requires them to come from the vocabulary.
    pub fn apply_param_change(&mut self, field: UtmField, value: impl Into<String>) {
        self.params.set(field, value);
    }

    /// Sets the explicit URL override. An empty string clears the override.
    pub fn set_search_url(&mut self, url: impl Into<String>) {
        self.search_url = url.into();
    }

    /// Regenerates the link list from the current state.
    ///
    /// A non-empty explicit URL takes precedence over the candidate list;
    /// otherwise every candidate is decorated in order. The previous links
    /// are replaced wholesale.
    pub fn generate(&mut self) {
        let explicit = if self.search_url.is_empty() {
            None
        } else {
            Some(self.search_url.as_str())
        };
        self.links = generate_links(explicit, &self.candidates, &self.params);
    }

    /// Resets the explicit URL, the generated links, and the parameters.
    ///
    /// The candidate list and vocabulary are kept.
    pub fn clear(&mut self) {
        self.search_url.clear();
        self.links.clear();
        self.params = self.vocabulary.default_params();
    }

    /// Generated links from the last [`generate`](Self::generate) call.
    pub fn links(&self) -> &[GeneratedLink] {
        &self.links
    }

    /// Current parameter values.
    pub fn params(&self) -> &UtmParams {
        &self.params
    }

    /// Candidate URLs available to this session.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The explicit URL override (empty when unset).
    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}
