use serde_json::{Map, Value};

use super::{CellContext, CellKey, CellRenderer, Markup, RenderError};
use crate::state::data_model::{self, escape_html};
use crate::state::i18n;

/// Aggregates a `check name -> failure count` mapping into detail links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ErrorListRenderer;

impl ErrorListRenderer {
    fn errors<'a>(&self, cell: &CellContext<'a>) -> Result<Vec<(&'a str, &'a Value)>, RenderError> {
        let map = match cell.value {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(RenderError::NotAnObject {
                    field: "errorlist".to_string(),
                })
            }
        };
        Ok(reported(map))
    }
}

fn reported(map: &Map<String, Value>) -> Vec<(&str, &Value)> {
    map.iter()
        .filter(|(_, count)| data_model::is_truthy(count))
        .map(|(check, count)| (check.as_str(), count))
        .collect()
}

/// Strips a leading `http://`, ignoring case.
pub fn strip_http_scheme(domain: &str) -> &str {
    const SCHEME: &str = "http://";
    match domain.get(..SCHEME.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(SCHEME) => &domain[SCHEME.len()..],
        _ => domain,
    }
}

/// Anchor for a check on the domain detail page: whitespace dropped, then the
/// first `/` removed.
pub fn check_slug(check: &str) -> String {
    let compact: String = check.chars().filter(|ch| !ch.is_whitespace()).collect();
    compact.replacen('/', "", 1)
}

impl CellRenderer for ErrorListRenderer {
    fn display(&self, cell: &CellContext<'_>) -> Result<Markup, RenderError> {
        let errors = self.errors(cell)?;
        if errors.is_empty() {
            return Ok(Markup::trusted(format!(
                "<span class=\"noErrors\">{}</span>",
                escape_html(i18n::tr(cell.locale, "errors.none"))
            )));
        }

        let domain = cell
            .row
            .get("domain")
            .and_then(Value::as_str)
            .ok_or_else(|| RenderError::MissingField {
                field: "domain".to_string(),
            })?;
        let domain = strip_http_scheme(domain);

        let items: String = errors
            .iter()
            .map(|(check, count)| {
                format!(
                    "<li><a href=\"/a11y/domain/{}#{}\" target=\"_blank\">{}: {}</a></li>",
                    escape_html(domain),
                    escape_html(&check_slug(check)),
                    escape_html(check),
                    escape_html(&data_model::display_value(count))
                )
            })
            .collect();
        Ok(Markup::trusted(format!("<ul class=\"errorList\">{items}</ul>")))
    }

    fn sort_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        let total = self
            .errors(cell)?
            .iter()
            .filter_map(|(_, count)| count.as_f64())
            .sum();
        Ok(CellKey::Number(total))
    }

    fn filter_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        let errors = self.errors(cell)?;
        if errors.is_empty() {
            return Ok(CellKey::Text(i18n::tr(cell.locale, "errors.none").to_string()));
        }
        let entries: Vec<String> = errors
            .iter()
            .map(|(check, count)| format!("{check}: {}", data_model::display_value(count)))
            .collect();
        Ok(CellKey::Text(entries.join(", ")))
    }
}
