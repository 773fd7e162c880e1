use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`ManifestJsonGenerator`](crate::ManifestJsonGenerator).
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A localization module was requested but the generator was built
    /// without a Localization collaborator.
    #[error("Missing localization: a localization module was requested but no Localization is configured")]
    MissingLocalization,

    /// Language enumeration, language lookup or translation failed.
    #[error(transparent)]
    Localization(#[from] anyhow::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}
