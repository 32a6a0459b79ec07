use std::sync::Arc;

use tracing::debug;

use crate::data::record::Record;
use crate::data::value_compare::compare_for_sort;
use crate::trace_table_op;
use crate::view::column::ColumnDescriptor;
use crate::view::filter::FilterSelection;
use crate::view::options::TableOptions;
use crate::view::pagination::Pagination;
use crate::view::rendered::{
    HeaderCell, RenderedCell, RenderedRow, RenderedTable, TableBody, NO_DATA_PLACEHOLDER,
};
use crate::view::sort::{SortDirection, SortState};

/// Produces the row key. Uniqueness is the caller's responsibility.
pub type KeyExtractor = Box<dyn Fn(&Record) -> String>;
pub type RowClickHandler = Box<dyn FnMut(&Record)>;
/// Receives the filtered, sorted record set (all pages)
pub type ExportHandler = Box<dyn FnMut(&[&Record])>;

/// A searchable, filterable, sortable, paginated view over a record list.
///
/// All interaction state lives here and is dropped with the view. The source
/// records are never modified; the view keeps index lists into them.
pub struct TableView {
    /// The underlying immutable records
    source: Arc<Vec<Record>>,
    columns: Vec<ColumnDescriptor>,
    key_extractor: KeyExtractor,
    options: TableOptions,
    placeholder: String,

    on_row_click: Option<RowClickHandler>,
    on_export: Option<ExportHandler>,

    /// View state
    search_text: String,
    filters: FilterSelection,
    sort: SortState,
    pagination: Pagination,

    /// Source indices after search, filters and sort
    filtered_rows: Vec<usize>,
    /// Source indices on the current page
    visible_rows: Vec<usize>,
}

impl TableView {
    /// Create a view with default options showing the first page
    pub fn new<F>(
        columns: Vec<ColumnDescriptor>,
        records: impl Into<Arc<Vec<Record>>>,
        key_extractor: F,
    ) -> Self
    where
        F: Fn(&Record) -> String + 'static,
    {
        let options = TableOptions::default();
        let mut view = Self {
            source: records.into(),
            columns,
            key_extractor: Box::new(key_extractor),
            pagination: Pagination::new(options.page_size),
            options,
            placeholder: NO_DATA_PLACEHOLDER.to_string(),
            on_row_click: None,
            on_export: None,
            search_text: String::new(),
            filters: FilterSelection::new(),
            sort: SortState::new(),
            filtered_rows: Vec::new(),
            visible_rows: Vec::new(),
        };
        view.update_filtered_rows();
        view
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.pagination = Pagination::new(options.page_size);
        self.options = options;
        self.update_filtered_rows();
        self
    }

    pub fn with_row_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Record) + 'static,
    {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn with_export<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&[&Record]) + 'static,
    {
        self.on_export = Some(Box::new(handler));
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn source(&self) -> &[Record] {
        &self.source
    }

    /// Replace the input records, keeping search, filters, sort and page
    pub fn set_records(&mut self, records: impl Into<Arc<Vec<Record>>>) {
        self.source = records.into();
        trace_table_op!(format!("records replaced ({} rows)", self.source.len()));
        self.update_filtered_rows();
    }

    // ---- search -------------------------------------------------------

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Set the free-text search and return to page 1
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.pagination.reset();
        trace_table_op!(format!("search = {:?}", text));
        self.update_filtered_rows();
    }

    // ---- filters ------------------------------------------------------

    pub fn filter_value(&self, field: &str) -> Option<&str> {
        self.filters.get(field)
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Select a filter value; an empty value removes the restriction
    pub fn set_filter(&mut self, field: &str, value: &str) {
        self.filters.set(field, value);
        self.pagination.reset();
        trace_table_op!(format!("filter {} = {:?}", field, value));
        self.update_filtered_rows();
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.set_filter(field, "");
    }

    /// Clear every filter and the search text
    pub fn reset_filters(&mut self) {
        self.filters.clear_all();
        self.search_text.clear();
        self.pagination.reset();
        trace_table_op!("filters reset");
        self.update_filtered_rows();
    }

    // ---- sort ---------------------------------------------------------

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Header click: flip the active field, or sort a new field ascending
    pub fn request_sort(&mut self, field: &str) {
        let sortable = self
            .columns
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.sortable)
            .unwrap_or(true);
        if !sortable {
            debug!(target: "table", "Ignoring sort request on column {}", field);
            return;
        }

        self.sort.request(field);
        trace_table_op!(format!("sort {} {}", field, self.sort.direction()));
        self.update_filtered_rows();
    }

    /// Sort a field in an explicit direction
    pub fn sort_by(&mut self, field: &str, direction: SortDirection) {
        self.sort = SortState::by(field, direction);
        trace_table_op!(format!("sort {} {}", field, direction));
        self.update_filtered_rows();
    }

    pub fn clear_sort(&mut self) {
        self.sort.clear();
        self.update_filtered_rows();
    }

    // ---- pagination ---------------------------------------------------

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> usize {
        if self.options.paginate {
            self.pagination.total_pages(self.filtered_rows.len())
        } else {
            self.filtered_rows.len().min(1)
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page, self.filtered_rows.len());
        self.update_page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.total_pages());
    }

    pub fn page_links(&self) -> Vec<usize> {
        if !self.options.paginate {
            return Vec::new();
        }
        self.pagination.page_links(self.filtered_rows.len())
    }

    // ---- derived rows -------------------------------------------------

    pub fn filtered_count(&self) -> usize {
        self.filtered_rows.len()
    }

    /// Records after search, filters and sort, across all pages
    pub fn filtered_records(&self) -> Vec<&Record> {
        self.filtered_rows.iter().map(|&i| &self.source[i]).collect()
    }

    /// Records on the current page
    pub fn visible_records(&self) -> Vec<&Record> {
        self.visible_rows.iter().map(|&i| &self.source[i]).collect()
    }

    pub fn visible_keys(&self) -> Vec<String> {
        self.visible_rows
            .iter()
            .map(|&i| (self.key_extractor)(&self.source[i]))
            .collect()
    }

    // ---- controls -----------------------------------------------------

    pub fn show_search(&self) -> bool {
        self.options.searchable
    }

    pub fn show_filters(&self) -> bool {
        self.options.filterable && !self.options.filter_options.is_empty()
    }

    pub fn show_export(&self) -> bool {
        self.options.exportable
    }

    pub fn show_pagination(&self) -> bool {
        self.options.paginate && self.total_pages() > 1
    }

    // ---- callbacks ----------------------------------------------------

    /// Hand the record at `index` on the current page to the row-click hook.
    /// Returns whether a hook ran.
    pub fn click_row(&mut self, index: usize) -> bool {
        let Some(&row_idx) = self.visible_rows.get(index) else {
            return false;
        };
        match self.on_row_click.as_mut() {
            Some(handler) => {
                handler(&self.source[row_idx]);
                true
            }
            None => false,
        }
    }

    /// Hand the filtered set to the export hook. Returns whether a hook ran.
    pub fn export(&mut self) -> bool {
        if !self.options.exportable {
            return false;
        }
        let records: Vec<&Record> = self.filtered_rows.iter().map(|&i| &self.source[i]).collect();
        match self.on_export.as_mut() {
            Some(handler) => {
                debug!(target: "table", "Exporting {} records", records.len());
                handler(&records);
                true
            }
            None => false,
        }
    }

    // ---- rendering ----------------------------------------------------

    pub fn render(&self) -> RenderedTable {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                field: column.field.clone(),
                label: column.header.clone(),
                width: column.width,
                sortable: column.sortable,
                sorted: if column.sortable {
                    self.sort.direction_for(&column.field)
                } else {
                    None
                },
                style: column.style,
            })
            .collect();

        let body = if self.visible_rows.is_empty() {
            TableBody::Placeholder {
                text: self.placeholder.clone(),
                colspan: self.columns.len(),
            }
        } else {
            TableBody::Rows(
                self.visible_rows
                    .iter()
                    .map(|&i| self.render_row(&self.source[i]))
                    .collect(),
            )
        };

        RenderedTable {
            headers,
            body,
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            filtered_count: self.filtered_count(),
            page_links: self.page_links(),
        }
    }

    fn render_row(&self, record: &Record) -> RenderedRow {
        RenderedRow {
            key: (self.key_extractor)(record),
            cells: self
                .columns
                .iter()
                .map(|column| RenderedCell {
                    text: column.render_cell(record),
                    tone: column.tone_for(record),
                })
                .collect(),
        }
    }

    // ---- recompute ----------------------------------------------------

    fn search_active(&self) -> bool {
        self.options.searchable && !self.search_text.is_empty()
    }

    fn matches_search(&self, record: &Record, needle: &str) -> bool {
        self.columns.iter().any(|column| {
            column
                .resolve_text(record)
                .map(|text| text.to_lowercase().contains(needle))
                .unwrap_or(false)
        })
    }

    /// Re-run search, filters and sort, then re-slice the page
    fn update_filtered_rows(&mut self) {
        let needle = self
            .search_active()
            .then(|| self.search_text.to_lowercase());
        let filtering = self.options.filterable && !self.filters.is_empty();

        let mut rows: Vec<usize> = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                needle
                    .as_deref()
                    .map_or(true, |n| self.matches_search(record, n))
            })
            .filter(|(_, record)| !filtering || self.filters.matches(record))
            .map(|(idx, _)| idx)
            .collect();

        if let Some(field) = self.sort.field() {
            let ascending = self.sort.direction().is_ascending();
            let source = &self.source;
            // Vec::sort_by is stable, equal keys keep their input order
            rows.sort_by(|&a, &b| {
                compare_for_sort(source[a].get(field), source[b].get(field), ascending)
            });
        }

        debug!(
            target: "table",
            "Recomputed rows: {} of {} match",
            rows.len(),
            self.source.len()
        );
        self.filtered_rows = rows;
        self.update_page();
    }

    /// Re-slice the current page out of the filtered rows
    fn update_page(&mut self) {
        let count = self.filtered_rows.len();
        self.pagination.clamp(count);
        self.visible_rows = if self.options.paginate {
            self.filtered_rows[self.pagination.window(count)].to_vec()
        } else {
            self.filtered_rows.clone()
        };
    }
}
