//! Error types for aodh-core

use std::path::PathBuf;

/// Result type for aodh-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, resolving or emitting configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest file not found at the given path
    #[error("Manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest has no `[facts]` table in any layer
    #[error("No [facts] table in any manifest layer")]
    MissingFacts,

    // Transparent wrappers for underlying crate errors
    /// Parameter, platform or facts error from aodh-meta
    #[error(transparent)]
    Meta(#[from] aodh_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// The underlying aodh-meta error, if this is one.
    pub fn as_meta(&self) -> Option<&aodh_meta::Error> {
        match self {
            Error::Meta(inner) => Some(inner),
            _ => None,
        }
    }
}
