//! Error types for the catalog core

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Catalog core errors
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input to a computation (e.g. non-finite comparison attribute)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Planet not found in the catalog
    #[error("Planet not found: {0}")]
    PlanetNotFound(String),

    /// Store/backend error, surfaced opaquely for display
    #[error("Store error: {0}")]
    Store(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
