//! Data model: dynamic records and field values

mod record;
mod value;

pub use record::Record;
pub use value::Value;
