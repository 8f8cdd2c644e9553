use thiserror::Error;

use crate::domain::PreReleaseType;

/// Unified error type for pep440-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version '{0}': {1}")]
    InvalidVersion(String, #[source] pep440_rs::VersionParseError),

    #[error("Invalid release field '{0}': expected one of major, minor, micro")]
    InvalidField(String),

    #[error("Invalid bump target '{0}': expected one of major, minor, micro, alpha, beta, rc")]
    InvalidTarget(String),

    #[error("Invalid pre-release identifier: '{0}'")]
    InvalidPreRelease(String),

    #[error("Cannot bump {version} back from {current} to {requested}: pre-releases only move forward (alpha, beta, rc)")]
    BackwardPrerelease {
        version: String,
        current: PreReleaseType,
        requested: PreReleaseType,
    },

    #[error("Cannot bump {version}: {component} would overflow")]
    Overflow {
        version: String,
        component: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pep440-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpError::Tag(msg.into())
    }

    /// Whether the error comes from the input itself rather than the environment
    pub fn is_input_error(&self) -> bool {
        !matches!(self, BumpError::Config(_) | BumpError::Io(_))
    }
}
