use anyhow::{Context, Result};
use manifest_localizer::{config::Config, ManifestJsonGenerator, OpenAiLocalization};
use serde_json::{Map, Value};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored if absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("manifest_localizer=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    info!("Reading manifest template {}", config.manifest_template.display());
    let content = tokio::fs::read_to_string(&config.manifest_template)
        .await
        .with_context(|| {
            format!(
                "Failed to read manifest template {}",
                config.manifest_template.display()
            )
        })?;
    let template: Map<String, Value> =
        serde_json::from_str(&content).context("Manifest template must be a JSON object")?;

    let localization = OpenAiLocalization::from_config(reqwest::Client::new(), &config);
    if config.localization_module.is_some() && localization.is_none() {
        warn!("LOCALIZATION_MODULE is set but OPENAI_API_KEY is not");
    }

    ManifestJsonGenerator::new(localization)
        .generate_manifest_jsons(
            &template,
            &config.manifest_output,
            config.localization_module.as_deref(),
        )
        .await?;

    info!("Manifests generated successfully!");
    Ok(())
}
