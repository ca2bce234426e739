//! Commune core library
//!
//! Domain logic for a municipality school-administration system: dynamic
//! records, the table engine behind every list page (search, filtering,
//! sorting, row selection), role-based route access, the Icelandic/English
//! translation catalog, CSV/XLS export writers, mass-mail recipient
//! selection, a news feed, and attendance statistics.

pub mod access;
pub mod error;
pub mod export;
pub mod i18n;
pub mod mail;
pub mod model;
pub mod news;
pub mod stats;
pub mod table;
