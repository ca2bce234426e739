//! Identifier-keyed row selection.

use std::collections::HashSet;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Multiple rows can be selected (checkbox style).
    Multi,
}

/// Tracks selected rows by their record identifiers.
///
/// Selection is keyed by identifier, not by position: a selected record
/// stays selected while search or filters hide it from view.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub mode: SelectionMode,
    pub selected: HashSet<String>,
}

impl Selection {
    /// Create selection with no selection allowed.
    pub fn none() -> Self {
        Self {
            mode: SelectionMode::None,
            selected: HashSet::new(),
        }
    }

    /// Create multi-selection mode.
    pub fn multi() -> Self {
        Self {
            mode: SelectionMode::Multi,
            selected: HashSet::new(),
        }
    }

    /// Returns `true` when selection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.mode != SelectionMode::None
    }

    /// Toggle selection for an identifier. Returns true if selection changed.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Multi => {
                let id = id.into();
                if self.selected.contains(&id) {
                    self.selected.remove(&id);
                } else {
                    self.selected.insert(id);
                }
                true
            }
        }
    }

    /// Check if an identifier is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected identifiers.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over all selected identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.selected.iter()
    }
}
