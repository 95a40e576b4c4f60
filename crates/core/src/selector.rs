//! Options for the map and operator selectors.

use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Raw dataset key, used for lookups.
    pub value: String,
    /// Display label: the key with its first character upper-cased.
    pub label: String,
}

impl SelectOption {
    pub fn new(key: &str) -> Self {
        Self {
            value: key.to_string(),
            label: capitalize_first(key),
        }
    }
}

/// Upper-cases the first character only; the rest is left as authored.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds one option per key, sorted lexically by the raw key.
pub fn selector_options<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<SelectOption> {
    let mut keys: Vec<&str> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.into_iter().map(SelectOption::new).collect()
}

pub fn map_options(dataset: &Dataset) -> Vec<SelectOption> {
    selector_options(dataset.map_names())
}

pub fn operator_options(dataset: &Dataset) -> Vec<SelectOption> {
    selector_options(dataset.operator_names())
}
