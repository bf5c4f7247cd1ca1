//! Error types for the episode API client.

use podcastr_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the episode API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Requested episode does not exist
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Response parsed but does not describe a playable episode
    #[error("Invalid episode data: {0}")]
    Invalid(#[from] CoreError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
