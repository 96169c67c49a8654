use thiserror::Error;

/// Core error types for ClaimGate operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new InvalidClaim error
    pub fn invalid_claim(message: impl Into<String>) -> Self {
        Self::InvalidClaim(message.into())
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
