//! Podcastr Episode API Client
//!
//! HTTP client for the JSON episode API that feeds the player.
//!
//! # Features
//!
//! - **Listing**: latest episodes, newest first, with a limit
//! - **Detail**: a single episode by id
//! - **Mapping**: wire records become [`podcastr_core::Episode`] values;
//!   durations may arrive as numbers or numeric strings
//!
//! # Example
//!
//! ```ignore
//! use podcastr_client::{ClientConfig, EpisodeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EpisodeClient::new(ClientConfig::new("http://localhost:3333"))?;
//!
//!     for episode in client.latest_episodes(12).await? {
//!         println!("{} - {}", episode.title, episode.members);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::EpisodeClient;
pub use error::{ClientError, Result};
pub use types::{parse_published_at, ApiEpisode, ApiFile, ClientConfig, DEFAULT_TIMEOUT};
