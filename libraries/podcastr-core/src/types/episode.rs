/// Episode domain type
use crate::error::{CoreError, Result};
use crate::types::EpisodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A podcast episode
///
/// Produced by the episode source and never mutated afterwards. Playback
/// only looks at `duration` and `media_url`; everything else is for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a single display string
    pub members: String,

    /// Thumbnail image reference
    pub thumbnail: String,

    /// Total running time
    pub duration: Duration,

    /// Playable media source
    pub media_url: String,

    /// HTML description (optional)
    pub description: Option<String>,

    /// Publication timestamp (optional)
    pub published_at: Option<DateTime<Utc>>,
}

impl Episode {
    /// Create a new episode with minimal metadata
    pub fn new(
        id: impl Into<EpisodeId>,
        title: impl Into<String>,
        media_url: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: String::new(),
            thumbnail: String::new(),
            duration,
            media_url: media_url.into(),
            description: None,
            published_at: None,
        }
    }

    /// Set the members string
    #[must_use]
    pub fn with_members(mut self, members: impl Into<String>) -> Self {
        self.members = members.into();
        self
    }

    /// Set the thumbnail reference
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the publication timestamp
    #[must_use]
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Convert a duration in (possibly fractional) seconds
    ///
    /// Rejects negative, NaN and infinite values.
    pub fn duration_from_secs(secs: f64) -> Result<Duration> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(CoreError::InvalidDuration(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| CoreError::InvalidDuration(secs))
    }
}
