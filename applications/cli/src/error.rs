/// CLI error types
use podcastr_playback::PlaybackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Bad argument: {0}")]
    BadArgument(String),

    #[error("{0} is not available right now")]
    Disabled(&'static str),

    #[error("No episode number {0} in the list")]
    NoSuchEpisode(usize),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
