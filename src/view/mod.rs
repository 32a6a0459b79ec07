//! Table view layer
//!
//! Column and filter descriptors, sort and page state, and the `TableView`
//! that derives the visible rows from them.

pub mod column;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod rendered;
pub mod sort;
pub mod status_badge;
pub mod table_view;

pub use column::{CellStyle, ColumnDescriptor};
pub use filter::{FilterDescriptor, FilterOption, FilterSelection};
pub use options::TableOptions;
pub use rendered::{RenderedTable, TableBody};
pub use sort::{SortDirection, SortState};
pub use table_view::TableView;
