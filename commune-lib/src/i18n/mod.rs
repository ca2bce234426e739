//! Language state and translation lookup.
//!
//! The UI language is process-wide configuration with an explicit lifecycle:
//! read the persisted preference once at startup, construct an [`I18n`],
//! and pass it to whatever needs lookup — there is no ambient global.
//! Switching languages goes through [`I18n::set_language`].

mod translations;

use std::str::FromStr;

use crate::error::ConfigError;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Icelandic, the default.
    #[default]
    Is,
    /// English.
    En,
}

impl Language {
    /// The two-letter code used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Is => "is",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "is" => Ok(Language::Is),
            "en" => Ok(Language::En),
            other => Err(ConfigError::unknown_language(other)),
        }
    }
}

/// Translation lookup bound to the current language.
///
/// # Example
///
/// ```
/// use commune_lib::i18n::{I18n, Language};
///
/// let mut i18n = I18n::new(Language::Is);
/// assert_eq!(i18n.t("nav.skolar"), "Skólar");
///
/// i18n.set_language(Language::En);
/// assert_eq!(i18n.t("nav.skolar"), "Schools");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct I18n {
    language: Language,
}

impl I18n {
    /// Creates lookup state for the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the active language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolves a dotted catalog path like `"nav.skolar"`.
    ///
    /// Unknown paths resolve to the path itself, so a missing entry shows
    /// up on screen as its key instead of breaking the page.
    pub fn t<'a>(&self, path: &'a str) -> &'a str {
        translations::lookup(self.language, path).unwrap_or(path)
    }
}
