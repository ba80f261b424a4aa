//! Cell renderers.
//!
//! A renderer turns one cell into one of three outputs depending on why the
//! table asks: markup to draw, a key to sort by, or a key to search in. Only
//! the display branch can produce [`Markup`]; sort and filter keys are
//! primitives, so markup never reaches a comparator.

mod entity_link;
mod error_list;
mod percent;

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::state::data_model::{self, Row};
use crate::state::locale::Locale;

pub use entity_link::{domains_link, EntityLinkRenderer, Noun};
pub use error_list::{check_slug, strip_http_scheme, ErrorListRenderer};
pub use percent::{format_percent, PercentRenderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Display,
    Sort,
    Filter,
}

impl RenderMode {
    pub fn all() -> &'static [Self] {
        &[Self::Display, Self::Sort, Self::Filter]
    }
}

/// HTML fragment produced for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Escapes `text` so it renders literally.
    pub fn text(text: &str) -> Self {
        Self(data_model::escape_html(text))
    }

    /// Wraps a fragment the caller has already escaped.
    pub(crate) fn trusted(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primitive value used for sorting and searching.
#[derive(Clone, Debug, PartialEq)]
pub enum CellKey {
    Missing,
    Number(f64),
    Text(String),
}

impl CellKey {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => n.as_f64().map(Self::Number).unwrap_or(Self::Missing),
            Some(Value::Bool(b)) => Self::Number(if *b { 1.0 } else { 0.0 }),
            Some(other) => Self::Text(data_model::display_value(other)),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Case-insensitive substring match against an already lowercased needle.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        match self {
            Self::Missing => false,
            Self::Number(n) => n.to_string().contains(needle),
            Self::Text(text) => text.to_lowercase().contains(needle),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl Eq for CellKey {}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellOutput {
    Display(Markup),
    SortKey(CellKey),
    FilterKey(CellKey),
}

impl CellOutput {
    /// Output used when a renderer fails: nothing to draw, sorts lowest.
    pub fn placeholder(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Display => Self::Display(Markup::empty()),
            RenderMode::Sort => Self::SortKey(CellKey::Missing),
            RenderMode::Filter => Self::FilterKey(CellKey::Missing),
        }
    }

    pub fn markup(&self) -> Option<&Markup> {
        match self {
            Self::Display(markup) => Some(markup),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&CellKey> {
        match self {
            Self::SortKey(key) | Self::FilterKey(key) => Some(key),
            Self::Display(_) => None,
        }
    }

    pub fn into_key(self) -> CellKey {
        match self {
            Self::SortKey(key) | Self::FilterKey(key) => key,
            Self::Display(_) => CellKey::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' is not a number")]
    NotANumber { field: String },

    #[error("field '{field}' is not an object")]
    NotAnObject { field: String },
}

/// Everything a renderer may look at for one cell.
#[derive(Clone, Copy, Debug)]
pub struct CellContext<'a> {
    pub value: Option<&'a Value>,
    pub row: &'a Row,
    pub locale: Locale,
}

impl<'a> CellContext<'a> {
    pub fn new(value: Option<&'a Value>, row: &'a Row, locale: Locale) -> Self {
        Self { value, row, locale }
    }
}

pub trait CellRenderer {
    fn display(&self, cell: &CellContext<'_>) -> Result<Markup, RenderError>;

    fn sort_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError>;

    fn filter_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        self.sort_key(cell)
    }

    fn render(&self, cell: &CellContext<'_>, mode: RenderMode) -> Result<CellOutput, RenderError> {
        Ok(match mode {
            RenderMode::Display => CellOutput::Display(self.display(cell)?),
            RenderMode::Sort => CellOutput::SortKey(self.sort_key(cell)?),
            RenderMode::Filter => CellOutput::FilterKey(self.filter_key(cell)?),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Renderer {
    /// Renders the raw value as escaped text.
    Plain,
    /// Renders nothing; used by control columns.
    Noop,
    Percent(PercentRenderer),
    EntityLink(EntityLinkRenderer),
    ErrorList(ErrorListRenderer),
}

impl Renderer {
    pub fn percent(category: &str, metric: &str) -> Self {
        Self::Percent(PercentRenderer::new(category, metric))
    }

    pub fn entity_link(count_field: &str, noun: Noun) -> Self {
        Self::EntityLink(EntityLinkRenderer::new(count_field, noun))
    }

    pub fn error_list() -> Self {
        Self::ErrorList(ErrorListRenderer)
    }

    fn inner(&self) -> &dyn CellRenderer {
        match self {
            Self::Plain => &PlainRenderer,
            Self::Noop => &NoopRenderer,
            Self::Percent(renderer) => renderer,
            Self::EntityLink(renderer) => renderer,
            Self::ErrorList(renderer) => renderer,
        }
    }
}

impl CellRenderer for Renderer {
    fn display(&self, cell: &CellContext<'_>) -> Result<Markup, RenderError> {
        self.inner().display(cell)
    }

    fn sort_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        self.inner().sort_key(cell)
    }

    fn filter_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        self.inner().filter_key(cell)
    }
}

struct PlainRenderer;

impl CellRenderer for PlainRenderer {
    fn display(&self, cell: &CellContext<'_>) -> Result<Markup, RenderError> {
        Ok(cell
            .value
            .map(|value| Markup::text(&data_model::display_value(value)))
            .unwrap_or_default())
    }

    fn sort_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        Ok(CellKey::from_value(cell.value))
    }
}

struct NoopRenderer;

impl CellRenderer for NoopRenderer {
    fn display(&self, _cell: &CellContext<'_>) -> Result<Markup, RenderError> {
        Ok(Markup::empty())
    }

    fn sort_key(&self, _cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        Ok(CellKey::Missing)
    }
}
