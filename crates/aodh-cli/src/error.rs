//! Error types for aodh-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from aodh-core
    #[error(transparent)]
    Core(#[from] aodh_core::Error),

    /// Error from aodh-meta
    #[error(transparent)]
    Meta(#[from] aodh_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialised
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}
