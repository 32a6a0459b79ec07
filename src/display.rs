use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use crossterm::style::Stylize;

use crate::view::rendered::{RenderedTable, TableBody};

/// Text rendering options for the terminal
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub use_color: bool,
    pub show_summary: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            use_color: true,
            show_summary: true,
        }
    }
}

/// Build a comfy-table for the rendered page
pub fn build_table(rendered: &RenderedTable, options: DisplayOptions) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = rendered
        .headers
        .iter()
        .map(|h| {
            let label = match h.sorted {
                Some(direction) => format!("{} {}", h.label, direction.arrow()),
                None => h.label.clone(),
            };
            Cell::new(label).add_attribute(Attribute::Bold)
        })
        .collect();
    table.set_header(headers);

    match &rendered.body {
        TableBody::Rows(rows) => {
            for row in rows {
                let cells: Vec<Cell> = row
                    .cells
                    .iter()
                    .map(|cell| {
                        let mut c = Cell::new(&cell.text);
                        if options.use_color {
                            if let Some(tone) = cell.tone {
                                c = c.fg(tone.color());
                            }
                        }
                        c
                    })
                    .collect();
                table.add_row(cells);
            }
        }
        TableBody::Placeholder { text, colspan } => {
            // comfy-table has no column spans; the notice sits in the first cell
            let mut cells = vec![Cell::new(text).set_alignment(CellAlignment::Center)];
            cells.extend((1..*colspan).map(|_| Cell::new("")));
            table.add_row(cells);
        }
    }

    // Fixed widths from the column descriptors
    for (idx, header) in rendered.headers.iter().enumerate() {
        if let (Some(width), Some(column)) = (header.width, table.column_mut(idx)) {
            column.set_constraint(comfy_table::ColumnConstraint::Absolute(
                comfy_table::Width::Fixed(width),
            ));
        }
    }

    table
}

/// Full text output: the table, then the summary line if enabled
pub fn render_to_string(rendered: &RenderedTable, options: DisplayOptions) -> String {
    let mut output = build_table(rendered, options).to_string();

    if options.show_summary {
        let summary = rendered.summary();
        output.push('\n');
        if options.use_color {
            output.push_str(&summary.green().to_string());
        } else {
            output.push_str(&summary);
        }
        if rendered.page_links.len() > 1 {
            let links: Vec<String> = rendered
                .page_links
                .iter()
                .map(|&p| {
                    if p == rendered.current_page {
                        format!("[{}]", p)
                    } else {
                        p.to_string()
                    }
                })
                .collect();
            output.push_str(&format!("  pages: {}", links.join(" ")));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Record;
    use crate::view::column::ColumnDescriptor;
    use crate::view::options::TableOptions;
    use crate::view::table_view::TableView;

    fn plain() -> DisplayOptions {
        DisplayOptions {
            use_color: false,
            show_summary: true,
        }
    }

    fn view(records: Vec<Record>) -> TableView {
        TableView::new(
            vec![
                ColumnDescriptor::new("id", "ID"),
                ColumnDescriptor::new("status", "Status").with_status_badge(),
            ],
            records,
            |r| r.text("id").unwrap_or_default(),
        )
        .with_options(TableOptions::default().with_page_size(1))
    }

    #[test]
    fn test_rows_and_summary() {
        let mut view = view(vec![
            Record::new().with("id", "T-1").with("status", "Approved"),
            Record::new().with("id", "T-2").with("status", "Rejected"),
        ]);
        view.request_sort("id");

        let output = render_to_string(&view.render(), plain());
        assert!(output.contains("ID ▲"));
        assert!(output.contains("T-1"));
        assert!(output.contains("Approved"));
        assert!(!output.contains("T-2"));
        assert!(output.contains("Page 1 of 2, 2 items"));
        assert!(output.contains("pages: [1] 2"));
    }

    #[test]
    fn test_placeholder_row() {
        let view = view(Vec::new());
        let output = render_to_string(&view.render(), plain());
        assert!(output.contains("No data available"));
        assert!(output.contains("Page 1 of 1, 0 items"));
    }
}
