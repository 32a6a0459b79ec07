use crate::data::record::Record;
use std::collections::{BTreeMap, BTreeSet};

/// One selectable value of a filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Metadata for one enumerable filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub field: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterDescriptor {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(FilterOption::new(label, value));
        self
    }

    /// Build the options from the distinct non-empty values of a field
    pub fn from_distinct_values(
        field: impl Into<String>,
        label: impl Into<String>,
        records: &[Record],
    ) -> Self {
        let field = field.into();
        let values: BTreeSet<String> = records
            .iter()
            .filter_map(|r| r.text(&field))
            .filter(|v| !v.is_empty())
            .collect();

        Self {
            options: values
                .into_iter()
                .map(|v| FilterOption::new(v.clone(), v))
                .collect(),
            field,
            label: label.into(),
        }
    }
}

/// Active filter selections keyed by field. A field with no entry is the
/// "no selection" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeMap<String, String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value; the empty string clears the field
    pub fn set(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.selected.remove(field);
        } else {
            self.selected.insert(field.to_string(), value.to_string());
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.selected.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.selected.get(field).map(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A record passes when every selected field's text equals the selection,
    /// ignoring case. Records missing a selected field do not pass.
    pub fn matches(&self, record: &Record) -> bool {
        self.selected.iter().all(|(field, wanted)| {
            record
                .text(field)
                .map(|actual| actual.to_lowercase() == wanted.to_lowercase())
                .unwrap_or(false)
        })
    }
}
