use crate::config::config::TableConfig;
use crate::view::filter::FilterDescriptor;
use crate::view::pagination::DEFAULT_PAGE_SIZE;

/// Feature toggles and fixed settings for one table instance
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub searchable: bool,
    pub filterable: bool,
    pub filter_options: Vec<FilterDescriptor>,
    pub paginate: bool,
    pub page_size: usize,
    /// Offer the export hook to the user; the engine never exports itself
    pub exportable: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            filterable: true,
            filter_options: Vec::new(),
            paginate: true,
            page_size: DEFAULT_PAGE_SIZE,
            exportable: true,
        }
    }
}

impl TableOptions {
    /// Defaults taken from the `[table]` section of the config file
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            searchable: config.searchable,
            filterable: config.filterable,
            filter_options: Vec::new(),
            paginate: config.paginate,
            page_size: config.page_size,
            exportable: config.exportable,
        }
    }

    pub fn with_filter_options(mut self, filter_options: Vec<FilterDescriptor>) -> Self {
        self.filter_options = filter_options;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn with_exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TableOptions::default();
        assert!(options.searchable);
        assert!(options.filterable);
        assert!(options.paginate);
        assert!(options.exportable);
        assert_eq!(options.page_size, 10);
        assert!(options.filter_options.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = TableConfig {
            page_size: 25,
            paginate: false,
            ..TableConfig::default()
        };
        let options = TableOptions::from_config(&config);
        assert_eq!(options.page_size, 25);
        assert!(!options.paginate);
        assert!(options.searchable);
    }
}
