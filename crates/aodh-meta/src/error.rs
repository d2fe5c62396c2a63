//! Error types for aodh-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A supplied parameter has the wrong type, is out of range, or is not
    /// recognized by the component.
    #[error("Invalid parameter '{key}' for {component}: {reason}")]
    InvalidParameter {
        component: String,
        key: String,
        reason: String,
    },

    /// The platform family has no entry in the platform path table.
    #[error("Unsupported platform family: {family}")]
    UnsupportedPlatform { family: String },

    /// Platform facts are missing or malformed.
    #[error("Invalid facts: {message}")]
    InvalidFacts { message: String },
}

impl Error {
    /// Create an [`Error::InvalidParameter`].
    pub fn invalid_parameter(
        component: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            component: component.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }
}
