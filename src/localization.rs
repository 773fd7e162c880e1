//! Localization collaborator contract.
//!
//! The generator never translates anything itself. It asks a `Localization`
//! implementation which languages exist, what direction each one is written
//! in, and what a string reads like in a given language.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Text flow direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Manifest `dir` value ("ltr" or "rtl").
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Metadata describing a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// Language code (e.g., "en", "fr", "en-XA")
    pub code: String,

    /// English name of the language
    pub name: String,

    /// Name of the language in the language itself
    pub native_name: String,

    pub direction: Direction,

    /// Pseudo or testing locale, only listed when explicitly requested
    pub special: bool,
}

/// Language enumeration, language lookup and text translation.
#[allow(async_fn_in_trait)]
pub trait Localization {
    /// All supported languages keyed by code. Special entries are included
    /// only when `include_special` is set.
    async fn get_languages(&self, include_special: bool) -> Result<BTreeMap<String, LanguageInfo>>;

    /// Metadata for a single language code.
    async fn get_language(&self, code: &str) -> Result<LanguageInfo>;

    /// Translate `text` from the `module` namespace into `language_code`.
    /// `context` disambiguates identical source strings.
    async fn translate(
        &self,
        module: &str,
        text: &str,
        context: Option<&str>,
        language_code: &str,
    ) -> Result<String>;
}

/// Placeholder collaborator for generators that never translate.
///
/// It has no values, so a `ManifestJsonGenerator<NoLocalization>` can only
/// ever hold `None`.
#[derive(Debug, Clone, Copy)]
pub enum NoLocalization {}

impl Localization for NoLocalization {
    async fn get_languages(&self, _include_special: bool) -> Result<BTreeMap<String, LanguageInfo>> {
        match *self {}
    }

    async fn get_language(&self, _code: &str) -> Result<LanguageInfo> {
        match *self {}
    }

    async fn translate(
        &self,
        _module: &str,
        _text: &str,
        _context: Option<&str>,
        _language_code: &str,
    ) -> Result<String> {
        match *self {}
    }
}
