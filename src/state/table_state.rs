use std::cmp::Ordering;

use thiserror::Error;
use tracing::debug;

use crate::state::column::{CellAttributes, CellType, ColumnDescriptor};
use crate::state::data_model::{Row, TableData};
use crate::state::expansion::{Activation, CellRef, ExpansionState, RowExpansionBridge};
use crate::state::locale::{Locale, LocaleSource};
use crate::state::render::{CellContext, CellKey, CellOutput, CellRenderer, Markup, RenderMode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub order: SortOrder,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableConfig {
    pub columns: Vec<ColumnDescriptor>,
    /// Export path handed through to the page untouched.
    pub csv: Option<String>,
    /// Locale used when the container carries no `language` attribute.
    pub locale_hint: Option<Locale>,
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn csv(mut self, path: &str) -> Self {
        self.csv = Some(path.to_string());
        self
    }

    pub fn locale_hint(mut self, locale: Locale) -> Self {
        self.locale_hint = Some(locale);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("table has no columns")]
    NoColumns,

    #[error("control column must be first, found at position {position}")]
    ControlNotFirst { position: usize },

    #[error("table declares {count} control columns, expected one")]
    MultipleControls { count: usize },

    #[error("table has no visible column to anchor row expansion")]
    NoVisibleColumn,
}

/// Binds a dataset to its column descriptors.
///
/// The first column is always the hidden control column; one is prepended when
/// the configuration does not start with it.
pub fn bind(dataset: TableData, config: TableConfig) -> Result<TableHandle, BindError> {
    let TableConfig {
        mut columns,
        csv,
        locale_hint,
    } = config;

    if columns.is_empty() {
        return Err(BindError::NoColumns);
    }

    let controls: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter_map(|(idx, column)| column.is_control().then_some(idx))
        .collect();
    match controls.as_slice() {
        [] => columns.insert(0, ColumnDescriptor::control()),
        [0] => {}
        [position] => return Err(BindError::ControlNotFirst { position: *position }),
        _ => {
            return Err(BindError::MultipleControls {
                count: controls.len(),
            })
        }
    }

    let anchor = columns
        .iter()
        .position(|column| column.visible)
        .ok_or(BindError::NoVisibleColumn)?;

    debug!(
        rows = dataset.len(),
        columns = columns.len(),
        anchor,
        "bound table"
    );

    Ok(TableHandle {
        data: dataset,
        columns,
        csv,
        locale_hint,
        bridge: RowExpansionBridge::new(anchor),
        expansion: ExpansionState::default(),
        sort_spec: None,
        search_query: String::new(),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableHandle {
    data: TableData,
    columns: Vec<ColumnDescriptor>,
    csv: Option<String>,
    locale_hint: Option<Locale>,
    bridge: RowExpansionBridge,
    expansion: ExpansionState,
    sort_spec: Option<SortSpec>,
    search_query: String,
}

impl TableHandle {
    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn csv_path(&self) -> Option<&str> {
        self.csv.as_deref()
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_spec.as_ref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn bridge(&self) -> RowExpansionBridge {
        self.bridge
    }

    pub fn anchor_column(&self) -> usize {
        self.bridge.primary_column()
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Re-reads the container attribute; the hint only fills in when it is
    /// absent.
    pub fn resolve_locale(&self, source: &dyn LocaleSource) -> Locale {
        match source.language_attribute() {
            Some(attribute) => Locale::resolve(Some(attribute)),
            None => self.locale_hint.unwrap_or_default(),
        }
    }

    /// Renders one cell. A failing renderer degrades to an empty cell that
    /// sorts lowest instead of failing the table.
    pub fn render_cell(
        &self,
        row_index: usize,
        column_index: usize,
        mode: RenderMode,
        locale: Locale,
    ) -> CellOutput {
        let (Some(row), Some(column)) = (self.data.get(row_index), self.columns.get(column_index))
        else {
            return CellOutput::placeholder(mode);
        };
        render_with(column, row, mode, locale)
    }

    pub fn sort_by_column_toggle(&mut self, column: usize) -> bool {
        let Some(descriptor) = self.columns.get(column) else {
            return false;
        };
        if !descriptor.orderable {
            return false;
        }

        let order = match self.sort_spec.as_ref() {
            Some(spec) if spec.column == column => toggle_sort_order(&spec.order),
            _ => SortOrder::Asc,
        };
        self.sort_spec = Some(SortSpec { column, order });
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort_spec = None;
    }

    pub fn set_search(&mut self, query: String) {
        self.search_query = query.trim().to_string();
    }

    /// Row indices that pass the search, in display order.
    pub fn visible_row_indices(&self, locale: Locale) -> Vec<usize> {
        let needle = self.search_query.to_lowercase();
        let mut rows: Vec<usize> = self
            .data
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| self.row_matches_search(row, &needle, locale).then_some(idx))
            .collect();

        if let Some(spec) = self.sort_spec.as_ref() {
            if let Some(column) = self.columns.get(spec.column) {
                let mut keyed: Vec<(CellKey, usize)> = rows
                    .iter()
                    .map(|idx| {
                        let key = render_with(column, &self.data[*idx], RenderMode::Sort, locale)
                            .into_key();
                        (key, *idx)
                    })
                    .collect();
                keyed.sort_by(|a, b| compare_keys(&a.0, &b.0, &spec.order));
                rows = keyed.into_iter().map(|(_, idx)| idx).collect();
            }
        }
        rows
    }

    /// Click or touch on a cell. The primary cell toggles its row directly;
    /// every other cell is forwarded to it through the bridge.
    pub fn activate_cell(&mut self, cell: CellRef) -> Option<bool> {
        if cell.row >= self.data.len() {
            return None;
        }
        let activation = if self.bridge.is_primary(cell) {
            Activation { row: cell.row }
        } else {
            self.bridge.route(cell)?
        };
        Some(self.expansion.activate(activation))
    }

    pub fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| HeaderCell {
                index,
                title_key: column.title_key,
                visible: column.visible,
                orderable: column.orderable,
                width: column.width.clone(),
                sort: self
                    .sort_spec
                    .as_ref()
                    .filter(|spec| spec.column == index)
                    .map(|spec| spec.order.clone()),
            })
            .collect()
    }

    /// Renders the visible rows and wires keyboard access on the result.
    pub fn draw(&self, locale: Locale) -> DrawnTable {
        let rows = self
            .visible_row_indices(locale)
            .into_iter()
            .map(|data_index| {
                let row = &self.data[data_index];
                let cells = self
                    .columns
                    .iter()
                    .map(|column| DrawnCell {
                        tag: column.cell_type,
                        visible: column.visible,
                        markup: render_with(column, row, RenderMode::Display, locale)
                            .markup()
                            .cloned()
                            .unwrap_or_default(),
                        attributes: column.create_cell(row),
                    })
                    .collect();
                DrawnRow {
                    data_index,
                    expanded: self.expansion.is_expanded(data_index),
                    cells,
                }
            })
            .collect();

        let mut table = DrawnTable {
            locale,
            anchor: self.anchor_column(),
            rows,
        };
        wire_keyboard(&mut table);
        table
    }

    fn row_matches_search(&self, row: &Row, needle: &str, locale: Locale) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.columns
            .iter()
            .filter(|column| column.visible)
            .any(|column| {
                render_with(column, row, RenderMode::Filter, locale)
                    .key()
                    .map(|key| key.matches(needle))
                    .unwrap_or(false)
            })
    }
}

fn render_with(column: &ColumnDescriptor, row: &Row, mode: RenderMode, locale: Locale) -> CellOutput {
    let cell = CellContext::new(column.field.lookup(row, locale), row, locale);
    column
        .renderer()
        .render(&cell, mode)
        .unwrap_or_else(|err| {
            debug!(
                field = %column.field.display_name(locale),
                ?mode,
                error = %err,
                "cell degraded to placeholder"
            );
            CellOutput::placeholder(mode)
        })
}

fn toggle_sort_order(order: &SortOrder) -> SortOrder {
    match order {
        SortOrder::Asc => SortOrder::Desc,
        SortOrder::Desc => SortOrder::Asc,
    }
}

fn compare_keys(a: &CellKey, b: &CellKey, order: &SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub index: usize,
    pub title_key: Option<&'static str>,
    pub visible: bool,
    pub orderable: bool,
    pub width: Option<String>,
    pub sort: Option<SortOrder>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnCell {
    pub tag: CellType,
    pub visible: bool,
    pub markup: Markup,
    pub attributes: CellAttributes,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnRow {
    pub data_index: usize,
    pub expanded: bool,
    pub cells: Vec<DrawnCell>,
}

impl DrawnRow {
    pub fn cell(&self, column: usize) -> Option<&DrawnCell> {
        self.cells.get(column)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnTable {
    pub locale: Locale,
    pub anchor: usize,
    pub rows: Vec<DrawnRow>,
}

/// Makes each row's anchor cell reachable and operable from the keyboard.
///
/// Redraws replace every cell, so this runs after each draw; running it twice
/// leaves the table unchanged.
pub fn wire_keyboard(table: &mut DrawnTable) {
    let anchor = table.anchor;
    for row in &mut table.rows {
        let expanded = row.expanded;
        if let Some(cell) = row.cells.get_mut(anchor) {
            cell.attributes.tabindex = Some(0);
            cell.attributes.role = Some("button".to_string());
            cell.attributes.aria_expanded = Some(expanded);
        }
    }
}
