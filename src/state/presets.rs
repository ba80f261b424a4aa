use serde::{Deserialize, Serialize};

use crate::state::column::{scope_row, CellType, ColumnDescriptor};
use crate::state::data_model::FieldPath;
use crate::state::render::{Noun, Renderer};

/// Column layouts of the published dashboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePreset {
    HttpsOrganizations,
    AccessibilityDomains,
}

impl TablePreset {
    pub fn columns(self) -> Vec<ColumnDescriptor> {
        match self {
            Self::HttpsOrganizations => https_organizations(),
            Self::AccessibilityDomains => accessibility_domains(),
        }
    }
}

/// HTTPS posture per organization, linked to each organization's domains.
pub fn https_organizations() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::control(),
        ColumnDescriptor::new(FieldPath::localized("name"))
            .title("column.organization")
            .render(Renderer::entity_link("https.eligible", Noun::Service))
            .on_create(scope_row),
        ColumnDescriptor::new("https.enforces")
            .title("column.enforces_https")
            .render(Renderer::percent("https", "enforces")),
        ColumnDescriptor::new("https.hsts")
            .title("column.hsts")
            .render(Renderer::percent("https", "hsts")),
        ColumnDescriptor::new("crypto.bod_crypto")
            .title("column.bod_crypto")
            .render(Renderer::percent("crypto", "bod_crypto")),
        ColumnDescriptor::new("preloading.preloaded")
            .title("column.preloaded")
            .render(Renderer::percent("preloading", "preloaded")),
    ]
}

/// Accessibility scan results per domain.
pub fn accessibility_domains() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("domain")
            .title("column.domain")
            .width("210px")
            .cell_type(CellType::Th)
            .on_create(scope_row),
        ColumnDescriptor::new("errors")
            .title("column.errors")
            .width("60px"),
        ColumnDescriptor::new("agency").title("column.agency"),
        ColumnDescriptor::new("errorlist")
            .title("column.error_details")
            .render(Renderer::error_list()),
    ]
}
