//! ConfigError for startup configuration

/// Error type for configuration values read at startup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The language code is not one of the supported languages.
    #[error("Unknown language code '{code}' (supported: is, en)")]
    UnknownLanguage { code: String },
}

impl ConfigError {
    /// Creates a new unknown language error.
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage { code: code.into() }
    }
}
