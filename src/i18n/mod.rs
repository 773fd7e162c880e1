//! Internationalization (i18n) module: the set of languages manifests can be
//! localized into.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages, their
//!   names and their text direction
//!
//! # Example
//!
//! ```rust,ignore
//! use manifest_localizer::i18n::LanguageRegistry;
//!
//! // Regular languages only
//! let languages = LanguageRegistry::get().list(false);
//!
//! // Including pseudo-locales such as "en-XA"
//! let all = LanguageRegistry::get().list(true);
//! ```

mod registry;

pub use registry::{LanguageConfig, LanguageRegistry};
