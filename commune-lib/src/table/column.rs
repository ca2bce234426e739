//! Column definitions for table display.

use std::fmt;
use std::sync::Arc;

use crate::model::Record;
use crate::model::Value;

/// Renders a cell from the raw field value and its record.
///
/// Only display output goes through this; search, filtering, sorting, and
/// export always read the raw value.
pub type CellRender = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of a list page: which field each column
/// reads, its display label, whether clicking its header sorts, and an
/// optional cell renderer. Column order defines display order.
///
/// # Examples
///
/// ```
/// use commune_lib::table::Column;
///
/// let columns = vec![
///     Column::new("nafn", "Nafn"),
///     Column::new("kennitala", "Kennitala").unsortable(),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field name this column reads.
    pub key: String,
    /// Column header text.
    pub label: String,
    /// Whether this column is sortable.
    pub sortable: bool,
    /// Optional cell renderer; raw display form is used when absent.
    pub render: Option<CellRender>,
}

impl Column {
    /// Create a new sortable column.
    ///
    /// Columns sort by default; opt out with [`unsortable`](Column::unsortable).
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            render: None,
        }
    }

    /// Make the column non-sortable.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Set a cell renderer.
    pub fn render(
        mut self,
        render: impl Fn(&Value, &Record) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Returns the display text for this column's cell in `record`.
    pub fn cell(&self, record: &Record) -> String {
        let value = record.value_of(&self.key);
        match &self.render {
            Some(render) => render(value, record),
            None => value.display(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
