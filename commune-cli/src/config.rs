//! The persisted language preference.
//!
//! Resolution order: `--lang` flag, `COMMUNE_LANGUAGE` environment
//! variable, the `language` file in the per-user config directory,
//! Icelandic. The flag also persists its value so later runs keep it.

use std::fs;
use std::path::PathBuf;

use commune_lib::i18n::Language;
use directories::ProjectDirs;

const LANGUAGE_FILE: &str = "language";
const ENV_VAR: &str = "COMMUNE_LANGUAGE";

/// Reads the language preference once at startup.
///
/// An unreadable or unknown stored value logs a warning and falls back to
/// the default instead of failing startup.
pub fn resolve_language(flag: Option<&str>) -> Language {
    if let Some(code) = flag {
        match code.parse::<Language>() {
            Ok(language) => {
                persist_language(language);
                return language;
            }
            Err(e) => log::warn!("--lang ignored: {e}"),
        }
    }

    if let Ok(code) = std::env::var(ENV_VAR) {
        match code.parse::<Language>() {
            Ok(language) => return language,
            Err(e) => log::warn!("{ENV_VAR} ignored: {e}"),
        }
    }

    if let Some(path) = language_file()
        && let Ok(code) = fs::read_to_string(&path)
    {
        match code.trim().parse::<Language>() {
            Ok(language) => return language,
            Err(e) => log::warn!("stored language preference ignored: {e}"),
        }
    }

    Language::default()
}

fn persist_language(language: Language) {
    let Some(path) = language_file() else {
        return;
    };
    if let Some(dir) = path.parent()
        && let Err(e) = fs::create_dir_all(dir)
    {
        log::warn!("could not create config directory: {e}");
        return;
    }
    if let Err(e) = fs::write(&path, language.as_str()) {
        log::warn!("could not persist language preference: {e}");
    }
}

fn language_file() -> Option<PathBuf> {
    ProjectDirs::from("is", "bollabyggd", "commune")
        .map(|dirs| dirs.config_dir().join(LANGUAGE_FILE))
}
