//! NewsError for the news feed

use chrono::NaiveDate;

/// Error type for publishing news items.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsError {
    /// The item has no title.
    #[error("News item has no title")]
    MissingTitle,

    /// The validity window ends before it starts.
    #[error("Validity window ends {valid_to} before it starts {valid_from}")]
    InvalidWindow {
        valid_from: NaiveDate,
        valid_to: NaiveDate,
    },
}
