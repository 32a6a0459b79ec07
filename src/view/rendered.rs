use crate::view::column::CellStyle;
use crate::view::sort::SortDirection;
use crate::view::status_badge::StatusTone;

pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// Header cell of a rendered table
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub field: String,
    pub label: String,
    pub width: Option<u16>,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
    pub style: CellStyle,
}

/// One body cell: display text plus the badge tone when the column has one
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub text: String,
    pub tone: Option<StatusTone>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub key: String,
    pub cells: Vec<RenderedCell>,
}

impl RenderedRow {
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// Single row spanning every column
    Placeholder { text: String, colspan: usize },
}

/// Snapshot of what the table shows for the current state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub current_page: usize,
    pub total_pages: usize,
    /// Records left after search and filters, before paging
    pub filtered_count: usize,
    pub page_links: Vec<usize>,
}

impl RenderedTable {
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder { .. } => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder { .. })
    }

    /// Number of rows the body occupies, the placeholder counting as one
    pub fn body_row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder { .. } => 1,
        }
    }

    pub fn summary(&self) -> String {
        let noun = if self.filtered_count == 1 { "item" } else { "items" };
        format!(
            "Page {} of {}, {} {}",
            self.current_page,
            self.total_pages.max(1),
            self.filtered_count,
            noun
        )
    }
}
