//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No episode is currently loaded
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Start index does not address an episode of the list
    #[error("Index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Media device error
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors reported by a media device implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The media source could not be loaded
    #[error("Failed to load media source: {0}")]
    Load(String),

    /// A transport command (start, seek) was rejected
    #[error("Device command failed: {0}")]
    Command(String),

    /// The binding this sender belonged to has been released
    #[error("Device binding released")]
    Detached,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
