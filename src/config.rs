use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Manifest
    pub manifest_template: PathBuf,
    pub manifest_output: String,
    pub localization_module: Option<String>,

    // OpenAI (optional: without a key no Localization is configured)
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,

    // Language the template's texts are written in
    pub source_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Manifest
            manifest_template: std::env::var("MANIFEST_TEMPLATE")
                .context("MANIFEST_TEMPLATE not set")?
                .into(),
            manifest_output: std::env::var("MANIFEST_OUTPUT")
                .context("MANIFEST_OUTPUT not set")?,
            localization_module: non_empty(std::env::var("LOCALIZATION_MODULE").ok()),

            // OpenAI
            openai_api_key: non_empty(std::env::var("OPENAI_API_KEY").ok()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),

            source_language: std::env::var("SOURCE_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        })
    }
}

/// Treat unset and blank variables the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
