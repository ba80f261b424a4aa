use serde_json::{Map, Value};

use crate::state::locale::Locale;

/// One record of a dataset. Key order follows the source document.
pub type Row = Map<String, Value>;
pub type TableData = Vec<Row>;

/// Where a column reads its value from inside a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldPath {
    /// No backing field (control columns).
    Empty,
    /// Dotted path such as `https.enforces`.
    Path(Vec<String>),
    /// `<base>_<locale>`, falling back to `<base>_en`.
    Localized(String),
}

impl FieldPath {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        Self::Path(trimmed.split('.').map(str::to_string).collect())
    }

    pub fn localized(base: &str) -> Self {
        Self::Localized(base.to_string())
    }

    pub fn lookup<'a>(&self, row: &'a Row, locale: Locale) -> Option<&'a Value> {
        match self {
            Self::Empty => None,
            Self::Path(segments) => lookup_path(row, segments),
            Self::Localized(base) => localized_value(row, base, locale),
        }
    }

    pub fn display_name(&self, locale: Locale) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Path(segments) => segments.join("."),
            Self::Localized(base) => format!("{base}_{}", locale.code()),
        }
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

fn lookup_path<'a>(row: &'a Row, segments: &[String]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = row.get(first)?;
    for segment in rest {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Reads `<base>_<locale>`; a missing or null localized value falls back to
/// the English field.
pub fn localized_value<'a>(row: &'a Row, base: &str, locale: Locale) -> Option<&'a Value> {
    let localized = row
        .get(&format!("{base}_{}", locale.code()))
        .filter(|value| !value.is_null());
    localized.or_else(|| {
        row.get(&format!("{base}_{}", Locale::En.code()))
            .filter(|value| !value.is_null())
    })
}

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// JavaScript-style truthiness, used where the dashboards skip zero counts.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
