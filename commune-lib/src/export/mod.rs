//! Export writers for visible table rows.
//!
//! Both writers consume `(visible records, columns)` and build the complete
//! document as a string; writing the bytes anywhere is the caller's job.
//! Cells always use raw field values, never a column's cell renderer.

mod csv;
mod excel;

pub use csv::write_csv;
pub use excel::write_excel;

use crate::model::Value;

/// The cell text shared by both formats: lists join with `"; "` and null
/// becomes the empty string.
fn cell_text(value: &Value) -> String {
    match value {
        Value::List(items) => items.join("; "),
        other => other.display(),
    }
}
