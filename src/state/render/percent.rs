use serde_json::Value;

use super::{CellContext, CellKey, CellRenderer, Markup, RenderError};

/// Presents a pre-computed ratio stored at `row[category][metric]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PercentRenderer {
    category: String,
    metric: String,
}

impl PercentRenderer {
    pub fn new(category: &str, metric: &str) -> Self {
        Self {
            category: category.to_string(),
            metric: metric.to_string(),
        }
    }

    /// `None` when the ratio is absent or null.
    fn ratio(&self, cell: &CellContext<'_>) -> Result<Option<f64>, RenderError> {
        let value = cell
            .row
            .get(&self.category)
            .and_then(Value::as_object)
            .and_then(|category| category.get(&self.metric));

        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| self.not_a_number()),
            Some(_) => Err(self.not_a_number()),
        }
    }

    fn not_a_number(&self) -> RenderError {
        RenderError::NotANumber {
            field: format!("{}.{}", self.category, self.metric),
        }
    }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

impl CellRenderer for PercentRenderer {
    fn display(&self, cell: &CellContext<'_>) -> Result<Markup, RenderError> {
        Ok(self
            .ratio(cell)?
            .map(|ratio| Markup::text(&format_percent(ratio)))
            .unwrap_or_default())
    }

    fn sort_key(&self, cell: &CellContext<'_>) -> Result<CellKey, RenderError> {
        Ok(self
            .ratio(cell)?
            .map(CellKey::Number)
            .unwrap_or(CellKey::Missing))
    }
}
