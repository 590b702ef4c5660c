//! Tabular layout shared by the spreadsheet serializers.
//!
//! Both exporters write the same single-sheet layout: one fixed header row
//! followed by one row per link. Keeping the layout here means the XLSX and
//! CSV documents can never drift apart.

use crate::compose::GeneratedLink;

/// Column labels of the link sheet, in column order.
pub const LINK_COLUMNS: [&str; 6] = [
    "Produto (URL original)",
    "Link UTM Gerado",
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
];

/// Returns the cell values for one link, in column order.
pub fn link_row(link: &GeneratedLink) -> [&str; 6] {
    [
        link.original_url.as_str(),
        link.utm_url.as_str(),
        link.params.source.as_str(),
        link.params.medium.as_str(),
        link.params.campaign.as_str(),
        link.params.content.as_str(),
    ]
}
