//! Episode API client.

use crate::error::{ClientError, Result};
use crate::types::{ApiEpisode, ClientConfig};
use podcastr_core::{CoreError, Episode};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a JSON episode API.
///
/// Lists the latest episodes and fetches single episodes by id, mapping
/// the wire format into [`Episode`] values the player can queue.
///
/// # Example
///
/// ```ignore
/// use podcastr_client::{ClientConfig, EpisodeClient};
///
/// let client = EpisodeClient::new(ClientConfig::new("http://localhost:3333"))?;
///
/// let latest = client.latest_episodes(12).await?;
/// println!("Found {} episodes", latest.len());
///
/// let detail = client.episode(latest[0].id.as_str()).await?;
/// println!("{} ({})", detail.title, detail.members);
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeClient {
    http: Client,
    base_url: Url,
}

impl EpisodeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let normalized = config.base_url.trim().trim_end_matches('/');
        if !normalized.starts_with("http://") && !normalized.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url =
            Url::parse(normalized).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Fetch the most recently published episodes, newest first.
    ///
    /// Entries that cannot be turned into a playable episode are skipped.
    pub async fn latest_episodes(&self, limit: usize) -> Result<Vec<Episode>> {
        if limit == 0 {
            return Err(CoreError::invalid_input("limit must be at least 1").into());
        }

        let url = self.endpoint(&["episodes"])?;
        debug!(url = %url, limit, "Fetching latest episodes");

        let response = self
            .http
            .get(url)
            .query(&[
                ("_limit", limit.to_string()),
                ("_sort", "published_at".to_string()),
                ("_order", "desc".to_string()),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let episodes: Vec<ApiEpisode> = response.json().await.map_err(|e| {
            ClientError::Parse(format!("Failed to parse episode list: {}", e))
        })?;

        let total = episodes.len();
        let episodes: Vec<Episode> = episodes
            .into_iter()
            .filter_map(|api| {
                let id = api.id.clone();
                match Episode::try_from(api) {
                    Ok(episode) => Some(episode),
                    Err(e) => {
                        warn!(episode_id = %id, error = %e, "Skipping invalid episode");
                        None
                    }
                }
            })
            .collect();

        debug!(total, kept = episodes.len(), "Fetched latest episodes");
        Ok(episodes)
    }

    /// Fetch a single episode by id.
    pub async fn episode(&self, id: &str) -> Result<Episode> {
        let url = self.endpoint(&["episodes", id])?;
        debug!(url = %url, "Fetching episode");

        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }

        let response = check_status(response).await?;
        let api: ApiEpisode = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse episode: {}", e)))?;

        Episode::try_from(api)
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(EpisodeClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(EpisodeClient::new(ClientConfig::new("http://localhost:3333")).is_ok());

        assert!(EpisodeClient::new(ClientConfig::new("")).is_err());
        assert!(EpisodeClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(EpisodeClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = EpisodeClient::new(ClientConfig::new("https://example.com/api/")).unwrap();
        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = EpisodeClient::new(ClientConfig::new("https://example.com/api")).unwrap();

        let url = client.endpoint(&["episodes", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/episodes/a%20b%2Fc");

        let root = EpisodeClient::new(ClientConfig::new("https://example.com")).unwrap();
        let url = root.endpoint(&["episodes"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/episodes");
    }
}
