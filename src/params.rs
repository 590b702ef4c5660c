//! Campaign parameter fields and values.
//!
//! This module defines the four UTM fields handled by the tool and the
//! parameter set that holds one value per field.

use strum_macros::EnumIter as EnumIterMacro;

/// The four campaign parameter fields, in their fixed query-string order.
///
/// The order of the variants is the order the parameters are appended to a
/// URL, so iterating the enum always yields `utm_source`, `utm_medium`,
/// `utm_campaign`, `utm_content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum UtmField {
    /// Traffic origin (`utm_source`)
    Source,
    /// Marketing channel (`utm_medium`)
    Medium,
    /// Campaign name (`utm_campaign`)
    Campaign,
    /// Creative or placement variant (`utm_content`)
    Content,
}

impl UtmField {
    /// Returns the query-string key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            UtmField::Source => "utm_source",
            UtmField::Medium => "utm_medium",
            UtmField::Campaign => "utm_campaign",
            UtmField::Content => "utm_content",
        }
    }
}

impl std::fmt::Display for UtmField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per campaign parameter field.
///
/// Values are treated as opaque strings; any validation happens at the
/// vocabulary level, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    /// Value for `utm_source`
    pub source: String,
    /// Value for `utm_medium`
    pub medium: String,
    /// Value for `utm_campaign`
    pub campaign: String,
    /// Value for `utm_content`
    pub content: String,
}

impl UtmParams {
    /// Returns the value of the given field.
    pub fn get(&self, field: UtmField) -> &str {
        match field {
            UtmField::Source => &self.source,
            UtmField::Medium => &self.medium,
            UtmField::Campaign => &self.campaign,
            UtmField::Content => &self.content,
        }
    }

    /// Replaces the value of the given field.
    pub fn set(&mut self, field: UtmField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UtmField::Source => self.source = value,
            UtmField::Medium => self.medium = value,
            UtmField::Campaign => self.campaign = value,
            UtmField::Content => self.content = value,
        }
    }
}
