//! Localized manifest generation.
//!
//! One manifest is written per language reported by the [`Localization`]
//! collaborator (`manifest-fr.json`, `manifest-ar.json`, ...), plus a default
//! manifest at the unmodified output path.

use crate::error::ManifestError;
use crate::localization::{Localization, NoLocalization};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Manifest fields passed through the translator, in translation order.
const TRANSLATABLE_FIELDS: [&str; 3] = ["description", "name", "short_name"];

/// Writes a template manifest once per language.
#[derive(Debug, Clone)]
pub struct ManifestJsonGenerator<L = NoLocalization> {
    localization: Option<L>,
}

impl ManifestJsonGenerator<NoLocalization> {
    /// Generator that can only write the untranslated default manifest.
    pub fn without_localization() -> Self {
        Self { localization: None }
    }
}

impl<L: Localization> ManifestJsonGenerator<L> {
    pub fn new(localization: Option<L>) -> Self {
        Self { localization }
    }

    /// Write the default manifest to `output_path` and, when
    /// `localization_module` is set, one `<base>-<code>.<ext>` manifest per
    /// language the collaborator knows about (special languages included).
    ///
    /// Languages are processed one after another. A failure aborts the
    /// remaining languages and leaves already written files in place.
    ///
    /// # Errors
    /// * [`ManifestError::MissingLocalization`] if a module is requested but
    ///   no collaborator was configured. Nothing is written in that case.
    /// * [`ManifestError::Localization`] for collaborator failures
    /// * [`ManifestError::Io`] for directory creation or write failures
    pub async fn generate_manifest_jsons(
        &self,
        template: &Map<String, Value>,
        output_path: impl AsRef<Path>,
        localization_module: Option<&str>,
    ) -> Result<(), ManifestError> {
        let output_path = output_path.as_ref();

        let translator = match (localization_module, self.localization.as_ref()) {
            (Some(module), Some(localization)) => Some((module, localization)),
            (Some(_), None) => return Err(ManifestError::MissingLocalization),
            (None, _) => None,
        };

        let mut languages: Vec<String> = match translator {
            Some((_, localization)) => localization.get_languages(true).await?.into_keys().collect(),
            None => Vec::new(),
        };
        // Default manifest, written last
        languages.push(String::new());

        for language in &languages {
            let path = localized_path(output_path, language);

            info!("Generate {}", path.display());

            let manifest = localize(template, language, translator).await?;

            write_manifest(&path, &manifest).await?;
        }

        Ok(())
    }
}

/// Deep copy of `template` with `lang` set and, when a translator is given
/// and the language is known, translated texts and `dir`.
async fn localize<L: Localization>(
    template: &Map<String, Value>,
    language: &str,
    translator: Option<(&str, &L)>,
) -> Result<Map<String, Value>, ManifestError> {
    let mut manifest = template.clone();

    let lang = resolve_lang(template, language);
    manifest.insert("lang".to_string(), lang.clone());

    let code = lang.as_str().filter(|code| !code.is_empty());

    if let (Some((module, localization)), Some(code)) = (translator, code) {
        for key in TRANSLATABLE_FIELDS {
            let text = match manifest.get(key).and_then(Value::as_str) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => continue,
            };

            let translated = localization.translate(module, &text, None, code).await?;
            manifest.insert(key.to_string(), Value::String(translated));
        }

        let language = localization.get_language(code).await?;
        manifest.insert(
            "dir".to_string(),
            Value::String(language.direction.as_str().to_string()),
        );
    }

    Ok(manifest)
}

/// The language code itself, or the template's own `lang`, or "".
fn resolve_lang(template: &Map<String, Value>, language: &str) -> Value {
    if !language.is_empty() {
        return Value::String(language.to_string());
    }

    match template.get("lang") {
        None | Some(Value::Null) => Value::String(String::new()),
        Some(lang) => lang.clone(),
    }
}

/// Insert `-<language>` before the extension of the file name.
///
/// `dist/manifest.json` + `fr` gives `dist/manifest-fr.json`. A file name
/// without extension gets the suffix appended.
fn localized_path(output_path: &Path, language: &str) -> PathBuf {
    if language.is_empty() {
        return output_path.to_path_buf();
    }

    let mut file_name = output_path
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    file_name.push("-");
    file_name.push(language);
    if let Some(extension) = output_path.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    output_path.with_file_name(file_name)
}

/// Four space indented JSON followed by a newline.
fn to_json_bytes(manifest: &Map<String, Value>) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

async fn write_manifest(path: &Path, manifest: &Map<String, Value>) -> Result<(), ManifestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ManifestError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let bytes = to_json_bytes(manifest)?;

    fs::write(path, bytes)
        .await
        .map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })
}
