//! Generate localized web app manifest JSON files from a single template.
//!
//! The [`ManifestJsonGenerator`] writes one default manifest plus one variant
//! per language reported by a [`Localization`] collaborator. Translation and
//! language metadata are delegated entirely to that collaborator;
//! [`OpenAiLocalization`] is the bundled implementation.

pub mod config;
pub mod error;
pub mod generator;
pub mod i18n;
pub mod localization;
pub mod retry;
pub mod translation;

pub use error::ManifestError;
pub use generator::ManifestJsonGenerator;
pub use localization::{Direction, LanguageInfo, Localization, NoLocalization};
pub use translation::OpenAiLocalization;
