//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a process-wide singleton initialized lazily through
//! `OnceLock`, and is immutable afterwards.

use crate::localization::{Direction, LanguageInfo};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language code (e.g., "en", "fr", "en-XA")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français", "العربية")
    pub native_name: &'static str,

    /// Text direction used for the manifest `dir` field
    pub direction: Direction,

    /// Pseudo-locale used for testing layouts, not a real translation target
    pub special: bool,
}

impl LanguageConfig {
    pub fn to_info(&self) -> LanguageInfo {
        LanguageInfo {
            code: self.code.to_string(),
            name: self.name.to_string(),
            native_name: self.native_name.to_string(),
            direction: self.direction,
            special: self.special,
        }
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// List languages in registry order, with or without special entries.
    pub fn list(&self, include_special: bool) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| include_special || !lang.special)
            .collect()
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: Direction::Rtl,
            special: false,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "fa",
            name: "Persian",
            native_name: "فارسی",
            direction: Direction::Rtl,
            special: false,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            direction: Direction::Rtl,
            special: false,
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            direction: Direction::Ltr,
            special: false,
        },
        LanguageConfig {
            code: "en-XA",
            name: "Pseudo English",
            native_name: "[Ƥşḗŭḓǿ Ḗƞɠŀīşħ]",
            direction: Direction::Ltr,
            special: true,
        },
    ]
}
