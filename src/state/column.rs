use crate::state::data_model::{FieldPath, Row};
use crate::state::render::Renderer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellType {
    #[default]
    Td,
    Th,
}

impl CellType {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Td => "td",
            Self::Th => "th",
        }
    }
}

/// Attributes applied to a created cell element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellAttributes {
    pub scope: Option<String>,
    pub classes: Vec<String>,
    pub tabindex: Option<i32>,
    pub role: Option<String>,
    pub aria_expanded: Option<bool>,
}

impl CellAttributes {
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// Runs once for every created cell of a column.
pub type CellHook = fn(&mut CellAttributes, &Row);

/// Marks the cell as the header of its row.
pub fn scope_row(attrs: &mut CellAttributes, _row: &Row) {
    attrs.scope = Some("row".to_string());
}

static PLAIN: Renderer = Renderer::Plain;

pub const CONTROL_CLASS: &str = "control";

/// How one field of a row becomes a table column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDescriptor {
    pub field: FieldPath,
    pub title_key: Option<&'static str>,
    pub cell_type: CellType,
    pub visible: bool,
    pub orderable: bool,
    pub class_name: Option<String>,
    pub width: Option<String>,
    pub render: Option<Renderer>,
    pub on_create: Option<CellHook>,
}

impl ColumnDescriptor {
    pub fn new(field: impl Into<FieldPath>) -> Self {
        Self {
            field: field.into(),
            title_key: None,
            cell_type: CellType::Td,
            visible: true,
            orderable: true,
            class_name: None,
            width: None,
            render: None,
            on_create: None,
        }
    }

    /// The hidden expand/collapse column that leads every bound table.
    pub fn control() -> Self {
        Self::new(FieldPath::Empty)
            .class_name(CONTROL_CLASS)
            .render(Renderer::Noop)
            .hidden()
            .unorderable()
    }

    pub fn is_control(&self) -> bool {
        self.class_name.as_deref() == Some(CONTROL_CLASS)
    }

    pub fn title(mut self, key: &'static str) -> Self {
        self.title_key = Some(key);
        self
    }

    pub fn cell_type(mut self, cell_type: CellType) -> Self {
        self.cell_type = cell_type;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn unorderable(mut self) -> Self {
        self.orderable = false;
        self
    }

    pub fn class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn width(mut self, width: &str) -> Self {
        self.width = Some(width.to_string());
        self
    }

    pub fn render(mut self, renderer: Renderer) -> Self {
        self.render = Some(renderer);
        self
    }

    pub fn on_create(mut self, hook: CellHook) -> Self {
        self.on_create = Some(hook);
        self
    }

    pub fn renderer(&self) -> &Renderer {
        self.render.as_ref().unwrap_or(&PLAIN)
    }

    pub fn create_cell(&self, row: &Row) -> CellAttributes {
        let mut attrs = CellAttributes::default();
        if let Some(class_name) = self.class_name.as_deref() {
            attrs.add_class(class_name);
        }
        if let Some(hook) = self.on_create {
            hook(&mut attrs, row);
        }
        attrs
    }
}
