use crate::config::Config;
use crate::i18n::LanguageRegistry;
use crate::localization::{LanguageInfo, Localization};
use crate::retry::RetryPolicy;
use anyhow::{bail, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Failure of a single chat completion call.
#[derive(Debug, Error)]
enum ApiError {
    #[error("Failed to send translation request to OpenAI API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("OpenAI API error during translation ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse OpenAI translation response: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("OpenAI translation response contained no choices")]
    NoChoices,
}

impl ApiError {
    /// Rate limits, server errors and network failures are worth another
    /// attempt; other client errors and malformed responses are not.
    fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            ApiError::Parse(_) | ApiError::NoChoices => false,
        }
    }
}

/// Manifest strings are short; reasoning models still need headroom.
const MAX_COMPLETION_TOKENS: u32 = 256;
const REASONING_MAX_COMPLETION_TOKENS: u32 = 4000;

/// Build the system prompt for translating one manifest string
fn build_translation_system_prompt(
    module: &str,
    source_language: &str,
    target_language: &str,
    context: Option<&str>,
) -> String {
    let mut prompt = format!(
        r#"You are a professional translator localizing a web application manifest.
Translate the text provided by the user from {source} to {target}.
The text belongs to the "{module}" localization module.

## Rules
- Reply with the translated text only, without quotes or explanations
- Keep product and brand names unchanged
- Keep the translation about as short as the original, it is displayed as an app name or description"#,
        source = source_language,
        target = target_language,
        module = module,
    );

    if let Some(context) = context {
        prompt.push_str(&format!("\n\n## Context\n{}", context));
    }

    prompt
}

fn language_name(code: &str) -> &str {
    LanguageRegistry::get()
        .get_by_code(code)
        .map(|config| config.name)
        .unwrap_or(code)
}

/// Localization backed by the language registry and an OpenAI-compatible
/// chat completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiLocalization {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
    source_language: String,
    retry: RetryPolicy,
}

impl OpenAiLocalization {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            api_url: api_url.into(),
            source_language: "en".to_string(),
            retry: RetryPolicy::chat_completion(),
        }
    }

    /// Build from configuration. Returns `None` when no API key is set.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Option<Self> {
        let api_key = config.openai_api_key.as_ref()?;
        Some(
            Self::new(client, api_key, &config.openai_model, &config.openai_api_url)
                .with_source_language(&config.source_language),
        )
    }

    /// Set the language the template strings are written in
    pub fn with_source_language(mut self, code: impl Into<String>) -> Self {
        self.source_language = code.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn complete(&self, request: &TranslationRequest) -> Result<String, ApiError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(ApiError::Status { status, body });
        }

        let chat_response: ChatResponse = response.json().await.map_err(ApiError::Parse)?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(ApiError::NoChoices)
    }

    fn build_request(
        &self,
        module: &str,
        text: &str,
        context: Option<&str>,
        language_code: &str,
    ) -> TranslationRequest {
        // Reasoning models don't support temperature - use reasoning_effort instead
        let is_reasoning = is_reasoning_model(&self.model);

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(
                        module,
                        language_name(&self.source_language),
                        language_name(language_code),
                        context,
                    ),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning {
                REASONING_MAX_COMPLETION_TOKENS
            } else {
                MAX_COMPLETION_TOKENS
            },
            temperature: if is_reasoning { None } else { Some(0.3) },
            reasoning_effort: if is_reasoning {
                Some("low".to_string())
            } else {
                None
            },
        }
    }
}

impl Localization for OpenAiLocalization {
    async fn get_languages(&self, include_special: bool) -> Result<BTreeMap<String, LanguageInfo>> {
        Ok(LanguageRegistry::get()
            .list(include_special)
            .into_iter()
            .map(|config| (config.code.to_string(), config.to_info()))
            .collect())
    }

    async fn get_language(&self, code: &str) -> Result<LanguageInfo> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(config.to_info()),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    async fn translate(
        &self,
        module: &str,
        text: &str,
        context: Option<&str>,
        language_code: &str,
    ) -> Result<String> {
        // Source language, no translation needed
        if language_code == self.source_language {
            return Ok(text.to_string());
        }

        debug!("Translating '{}' ({}) to {}", text, module, language_code);

        let request = &self.build_request(module, text, context, language_code);

        let translated = self
            .retry
            .run(
                &format!("Translation to {}", language_code),
                || self.complete(request),
                ApiError::is_transient,
            )
            .await?;

        Ok(translated)
    }
}
