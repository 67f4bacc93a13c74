//! Error types for statement building.

use thiserror::Error;

/// Errors raised while assembling a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The builder is not in a state that allows the requested operation.
    #[error("invalid builder state: {0}")]
    InvalidState(String),
}

impl BuildError {
    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, BuildError>;
