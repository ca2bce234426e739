//! Error types

mod config;
mod field;
mod mail;
mod news;

pub use config::*;
pub use field::*;
pub use mail::*;
pub use news::*;
