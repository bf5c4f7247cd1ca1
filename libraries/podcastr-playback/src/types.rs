//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Transport and mode flags
///
/// Each flag toggles independently. `is_shuffling` only changes what
/// "has next" means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackFlags {
    /// Listener intends audio to be playing
    pub is_playing: bool,

    /// Device repeats the current episode
    pub is_looping: bool,

    /// Next picks a random queue position
    pub is_shuffling: bool,
}

/// Configuration for the queue controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Seed for shuffle draws; entropy-seeded when `None`
    pub shuffle_seed: Option<u64>,
}

/// Which player affordances are currently usable
///
/// Everything is disabled while no episode is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerControls {
    /// Play/pause button
    pub play_pause: bool,

    /// Previous button
    pub previous: bool,

    /// Next button
    pub next: bool,

    /// Shuffle toggle (needs more than one queued episode)
    pub shuffle: bool,

    /// Loop toggle
    pub repeat: bool,

    /// Progress slider
    pub seek: bool,
}
