//! Campaign parameter vocabulary.
//!
//! The vocabulary lists the allowed values for each of the four parameter
//! fields. A built-in set ships with the binary; deployments can replace it
//! with a TOML file (`--vocabulary`). Values are opaque strings and are never
//! validated beyond being read from the file.

use std::path::Path;

use serde::Deserialize;

use crate::error_handling::VocabularyError;
use crate::params::{UtmField, UtmParams};

const DEFAULT_SOURCES: [&str; 8] = [
    "google",
    "facebook",
    "instagram",
    "linkedin",
    "email",
    "tiktok",
    "youtube",
    "whatsapp",
];

const DEFAULT_MEDIUMS: [&str; 8] = [
    "cpc",
    "social",
    "display",
    "video",
    "stories",
    "reels",
    "email_marketing",
    "afiliados",
];

const DEFAULT_CAMPAIGNS: [&str; 8] = [
    "black_friday_2025",
    "lancamento_freecook",
    "showroom_campinas",
    "promocao_icetech",
    "natal_2025",
    "aniversario_15anos",
    "pitada_certa",
    "colher_de_dica",
];

const DEFAULT_CONTENTS: [&str; 8] = [
    "banner_promo",
    "video_ana_carolina",
    "reels_matheus",
    "anuncio_dinamico",
    "teste_ab_variacao1",
    "email_oferta_especial",
    "story_demonstração_fit",
    "post_tbt_fipan",
];

/// Allowed values for each campaign parameter field.
///
/// Deserialized from TOML with one string array per field:
///
/// ```toml
/// source = ["google", "newsletter"]
/// medium = ["cpc"]
/// campaign = ["inverno_2026"]
/// content = ["banner_a", "banner_b"]
/// ```
///
/// Fields missing from the file keep their built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Allowed `utm_source` values
    pub source: Vec<String>,
    /// Allowed `utm_medium` values
    pub medium: Vec<String>,
    /// Allowed `utm_campaign` values
    pub campaign: Vec<String>,
    /// Allowed `utm_content` values
    pub content: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        fn owned(values: [&str; 8]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }
        Self {
            source: owned(DEFAULT_SOURCES),
            medium: owned(DEFAULT_MEDIUMS),
            campaign: owned(DEFAULT_CAMPAIGNS),
            content: owned(DEFAULT_CONTENTS),
        }
    }
}

impl Vocabulary {
    /// Reads a vocabulary from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Io` if the file cannot be read and
    /// `VocabularyError::Parse` if it is not valid vocabulary TOML.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let text = std::fs::read_to_string(path)?;
        let vocabulary = toml::from_str(&text)?;
        Ok(vocabulary)
    }

    /// Loads the vocabulary from `path`, or returns the built-in one.
    pub fn resolve(path: Option<&Path>) -> Result<Self, VocabularyError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The allowed values for one field.
    pub fn options(&self, field: UtmField) -> &[String] {
        match field {
            UtmField::Source => &self.source,
            UtmField::Medium => &self.medium,
            UtmField::Campaign => &self.campaign,
            UtmField::Content => &self.content,
        }
    }

    /// The default value for one field: its first entry, or an empty string
    /// when the field has no entries.
    pub fn default_value(&self, field: UtmField) -> &str {
        self.options(field).first().map(String::as_str).unwrap_or("")
    }

    /// A parameter set preloaded with each field's default value.
    pub fn default_params(&self) -> UtmParams {
        UtmParams {
            source: self.default_value(UtmField::Source).to_string(),
            medium: self.default_value(UtmField::Medium).to_string(),
            campaign: self.default_value(UtmField::Campaign).to_string(),
            content: self.default_value(UtmField::Content).to_string(),
        }
    }
}
