//! Exact-match filter definitions and their option domains.

use crate::model::Record;
use crate::model::Value;

/// Describes one field usable as an exact-match filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Field name the filter matches against.
    pub key: String,
    /// Display label for the filter control.
    pub label: String,
}

impl FilterSpec {
    /// Create a new filter spec.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Returns the option domain for a filter: the distinct non-empty values
/// present in `records` for `spec.key`, sorted by [`Value::compare`].
///
/// Null values and empty strings are excluded — they represent "no value"
/// and are not offered as options. Recomputed from the live record set
/// whenever consulted; never cached.
pub fn filter_options(records: &[Record], spec: &FilterSpec) -> Vec<Value> {
    let mut options: Vec<Value> = Vec::new();
    for record in records {
        let value = record.value_of(&spec.key);
        if value.is_null() {
            continue;
        }
        if let Value::String(s) = value
            && s.is_empty()
        {
            continue;
        }
        if !options.contains(value) {
            options.push(value.clone());
        }
    }
    options.sort_by(|a, b| a.compare(b));
    options
}
