/// ID types for Podcastr entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode identifier (the slug used by the episode API)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EpisodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let id = EpisodeId::new("faladev-14");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"faladev-14\"");

        let back: EpisodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.to_string(), "faladev-14");
    }
}
