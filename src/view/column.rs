use crate::data::record::Record;
use crate::view::status_badge::StatusTone;
use std::fmt;
use std::sync::Arc;

/// Custom cell renderer supplied by the caller
pub type CellRenderer = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// How the text display should style a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    /// Colour the cell by the tone of its status text
    StatusBadge,
}

/// Describes how one field is displayed
#[derive(Clone)]
pub struct ColumnDescriptor {
    pub field: String,
    pub header: String,
    pub render: Option<CellRenderer>,
    pub width: Option<u16>,
    pub sortable: bool,
    pub style: CellStyle,
    /// Synthetic columns (e.g. "actions") name no record property
    pub synthetic: bool,
}

impl ColumnDescriptor {
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            render: None,
            width: None,
            sortable: true,
            style: CellStyle::Plain,
            synthetic: false,
        }
    }

    /// A column with no backing field. Renders empty unless given a renderer.
    pub fn synthetic(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            sortable: false,
            synthetic: true,
            ..Self::new(key, header)
        }
    }

    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Render the field as a status badge: same label, coloured by tone
    pub fn with_status_badge(mut self) -> Self {
        let field = self.field.clone();
        self.render = Some(Arc::new(move |record: &Record| {
            record.text(&field).unwrap_or_default()
        }));
        self.style = CellStyle::StatusBadge;
        self
    }

    /// Raw text of this column's field, used for search matching and export
    pub fn resolve_text(&self, record: &Record) -> Option<String> {
        if self.synthetic {
            return None;
        }
        record.text(&self.field)
    }

    /// Display text of the cell for a record
    pub fn render_cell(&self, record: &Record) -> String {
        match &self.render {
            Some(render) => render(record),
            None => self.resolve_text(record).unwrap_or_default(),
        }
    }

    /// Tone for badge-styled cells, `None` for plain columns
    pub fn tone_for(&self, record: &Record) -> Option<StatusTone> {
        match self.style {
            CellStyle::StatusBadge => Some(StatusTone::classify(&self.render_cell(record))),
            CellStyle::Plain => None,
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("style", &self.style)
            .field("synthetic", &self.synthetic)
            .finish()
    }
}
