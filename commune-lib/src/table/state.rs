//! Per-table UI state: search, filters, sort, selection.

use std::collections::HashMap;

use super::Column;
use super::Direction;
use super::Selection;
use super::Sort;
use crate::model::Record;
use crate::model::Value;

/// The mutable state of one table instance.
///
/// Created empty when a list page is shown and discarded with it; never
/// persisted. The visible row set is always recomputed from scratch from
/// `(records, columns, state)` — see
/// [`compute_visible`](super::compute_visible).
///
/// Every operation is total: input the state cannot interpret (an unknown
/// sort key, a filter on a field no record has) degrades to a no-op or a
/// non-match, never an error. This is display logic, not a validation
/// layer.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Case-insensitive substring search across column values.
    pub search: String,
    /// Active exact-match filters; an absent key imposes no constraint.
    pub filters: HashMap<String, Value>,
    /// Active sort, if any.
    pub sort: Option<Sort>,
    /// Row selection.
    pub selection: Selection,
}

impl TableState {
    /// Creates empty state with selection disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty state with multi-row selection enabled.
    pub fn with_selection() -> Self {
        Self {
            selection: Selection::multi(),
            ..Self::default()
        }
    }

    /// Replaces the search string. An empty string clears the search.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Toggles sorting on a column key.
    ///
    /// Sorting the already-sorted key flips direction; any other key sorts
    /// ascending. No-op when no column has this key or the column is not
    /// sortable.
    pub fn toggle_sort(&mut self, columns: &[Column], key: &str) {
        let sortable = columns.iter().any(|c| c.key == key && c.sortable);
        if !sortable {
            return;
        }
        self.sort = Some(match &self.sort {
            Some(sort) if sort.key == key => Sort {
                key: sort.key.clone(),
                direction: sort.direction.flipped(),
            },
            _ => Sort {
                key: key.to_string(),
                direction: Direction::Asc, // New sort key starts ascending
            },
        });
    }

    /// Sets one filter's active value without touching other filters.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.filters.insert(key.into(), value.into());
    }

    /// Unsets one filter without touching other filters.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    /// Unsets every filter in one operation.
    pub fn clear_all_filters(&mut self) {
        self.filters.clear();
    }

    // =========================================================================
    // Selection
    //
    // Selection is identifier-keyed and independent of visibility; only
    // toggle_select_all is scoped to the currently visible rows.
    // =========================================================================

    /// Flips one identifier's membership in the selection set.
    pub fn toggle_select_one(&mut self, id: impl Into<String>) {
        self.selection.toggle(id);
    }

    /// Selects or deselects exactly the currently visible rows.
    ///
    /// If every visible record is already selected, the visible identifiers
    /// are removed from the selection; otherwise they are all added.
    /// Identifiers of rows hidden by search or filters are never touched.
    pub fn toggle_select_all(&mut self, visible: &[&Record]) {
        if !self.selection.is_enabled() {
            return;
        }
        if self.all_selected(visible) {
            for record in visible {
                self.selection.selected.remove(record.id());
            }
        } else {
            for record in visible {
                self.selection.selected.insert(record.id().to_string());
            }
        }
    }

    /// `true` when selection is enabled, the visible set is non-empty, and
    /// every visible record is selected.
    pub fn all_selected(&self, visible: &[&Record]) -> bool {
        self.selection.is_enabled()
            && !visible.is_empty()
            && visible.iter().all(|r| self.selection.is_selected(r.id()))
    }

    /// `true` when selection is enabled, non-empty, and not all visible rows
    /// are selected (the indeterminate checkbox state).
    pub fn some_selected(&self, visible: &[&Record]) -> bool {
        self.selection.is_enabled() && !self.selection.is_empty() && !self.all_selected(visible)
    }
}
