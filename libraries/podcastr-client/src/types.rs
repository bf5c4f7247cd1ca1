//! Types for the episode API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use podcastr_core::{CoreError, Episode};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::error::ClientError;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for connecting to an episode API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:3333")
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Episode as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file: ApiFile,
}

/// Media file of an episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    /// Length in seconds; the API sends either a number or a numeric string
    #[serde(deserialize_with = "seconds_from_number_or_string")]
    pub duration: f64,
}

fn seconds_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(f64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Number(secs) => Ok(secs),
        Seconds::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid duration: {:?}", text))),
    }
}

/// Parse a publication timestamp.
///
/// Accepts RFC 3339 and the zone-less `YYYY-MM-DD HH:MM:SS` form, which is
/// read as UTC. A bare date means midnight.
pub fn parse_published_at(raw: &str) -> std::result::Result<DateTime<Utc>, CoreError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CoreError::invalid_input(format!("unparseable date: {:?}", raw)))
}

impl TryFrom<ApiEpisode> for Episode {
    type Error = ClientError;

    fn try_from(api: ApiEpisode) -> Result<Self, Self::Error> {
        let duration = Episode::duration_from_secs(api.file.duration)?;

        let mut episode = Episode::new(api.id, api.title, api.file.url, duration)
            .with_members(api.members)
            .with_thumbnail(api.thumbnail);

        if let Some(description) = api.description {
            episode = episode.with_description(description);
        }

        match api.published_at.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                episode = episode.with_published_at(parse_published_at(raw)?);
            }
            _ => {}
        }

        Ok(episode)
    }
}
