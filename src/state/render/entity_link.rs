use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use super::{CellContext, CellKey, CellRenderer, Markup, RenderError};
use crate::state::data_model::{self, escape_html, FieldPath};
use crate::state::i18n;
use crate::state::locale::Locale;

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Noun {
    Service,
    Domain,
}

impl Noun {
    /// Plural only above one; zero reads as singular.
    pub fn key(self, count: u64) -> &'static str {
        match (self, count > 1) {
            (Self::Service, false) => "noun.service.one",
            (Self::Service, true) => "noun.service.other",
            (Self::Domain, false) => "noun.domain.one",
            (Self::Domain, true) => "noun.domain.other",
        }
    }
}

/// Organization name with a link to the per-domain table filtered to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityLinkRenderer {
    count_field: FieldPath,
    noun: Noun,
}

impl EntityLinkRenderer {
    pub fn new(count_field: &str, noun: Noun) -> Self {
        Self {
            count_field: FieldPath::parse(count_field),
            noun,
        }
    }

    fn name<'a>(&self, cell: &CellContext<'a>) -> Result<&'a str, RenderError> {
        data_model::localized_value(cell.row, "name", cell.locale)
            .and_then(Value::as_str)
            .ok_or_else(|| RenderError::MissingField {
                field: format!("name_{}", cell.locale.code()),
            })
    }

    fn count(&self, cell: &CellContext<'_>) -> Result<u64, RenderError> {
        let field = || self.count_field.display_name(cell.locale);
        let value = self
            .count_field
            .lookup(cell.row, cell.locale)
            .ok_or_else(|| RenderError::MissingField { field: field() })?;
        value
            .as_u64()
            .or_else(|| value.as_f64().map(|f| f.max(0.0) as u64))
            .ok_or_else(|| RenderError::NotANumber { field: field() })
    }
}

/// `/{locale}/domains/#q=<name>`, encoded the way `encodeURIComponent` does.
pub fn domains_link(locale: Locale, query: &str) -> String {
    format!(
        "/{}/domains/#q={}",
        locale.code(),
        utf8_percent_encode(query, URI_COMPONENT)
    )
}

impl CellRenderer for EntityLinkRenderer {
    fn display(&self, cell: &CellContext<'_>) -> Result<Markup, RenderError> {
        let name = self.name(cell)?;
        let count = self.count(cell)?;
        let canonical = data_model::localized_value(cell.row, "name", Locale::En)
            .and_then(Value::as_str)
            .unwrap_or(name);

        let label = format!(
            "{} {count} {}",
            i18n::tr(cell.locale, "entity.show"),
            i18n::tr(cell.locale, self.noun.key(count))
        );

        Ok(Markup::trusted(format!(
            "<div class=\"mb-2\">{}</div><a href=\"{}\">{}</a>",
            escape_html(name),
            escape_html(&domains_link(cell.locale, canonical)),
            escape_html(&label)
        )))
    }

    fn sort_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        Ok(CellKey::Text(self.name(cell)?.to_string()))
    }
}
