/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Episode duration was negative, NaN or infinite
    #[error("Invalid duration: {0}")]
    InvalidDuration(f64),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
