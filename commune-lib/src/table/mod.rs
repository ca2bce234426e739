//! The table engine behind every list page.
//!
//! A page supplies raw [`Record`](crate::model::Record)s, [`Column`]s, and
//! [`FilterSpec`]s; [`TableState`] holds the search/filter/sort/selection
//! state; [`compute_visible`] derives the visible rows from scratch on
//! every change. Pure, synchronous, and total — no operation fails.

mod column;
mod engine;
mod filter;
mod selection;
mod sort;
mod state;

pub use column::CellRender;
pub use column::Column;
pub use engine::compute_visible;
pub use filter::FilterSpec;
pub use filter::filter_options;
pub use selection::Selection;
pub use selection::SelectionMode;
pub use sort::Direction;
pub use sort::Sort;
pub use state::TableState;
