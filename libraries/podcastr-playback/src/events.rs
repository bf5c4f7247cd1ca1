//! Playback Events
//!
//! Two directions of traffic:
//! - `PlayerEvent`: emitted by the controller for UI synchronization
//! - `DeviceEvent`: reported by a media device about what really happened
//!
//! `SurfaceSignal` is the subset of device events the surface hands back
//! to its owner instead of acting on itself.

use podcastr_core::EpisodeId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the queue controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing flag changed
    StateChanged {
        /// The new value of the playing flag
        is_playing: bool,
    },

    /// Current episode changed
    EpisodeChanged {
        /// ID of the new (current) episode
        episode_id: EpisodeId,
        /// Position of the new episode in the queue
        index: usize,
        /// ID of the previous episode (if any)
        previous_episode_id: Option<EpisodeId>,
    },

    /// Queue was replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Loop flag changed
    LoopChanged { is_looping: bool },

    /// Shuffle flag changed
    ShuffleChanged { is_shuffling: bool },

    /// Queue was emptied
    Cleared,
}

/// Events reported by a media device
///
/// Devices send these from whatever thread their media engine uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Audio actually started (including autoplay and external resume)
    Started,

    /// Audio actually paused (including external pause)
    Paused,

    /// Media metadata is available; position sampling may begin
    MetadataReady {
        /// Total duration reported by the media
        duration: Duration,
    },

    /// Playback position moved
    PositionChanged {
        /// Elapsed time from the start of the media
        elapsed: Duration,
    },

    /// Media reached its end (never sent while looping)
    Ended,

    /// Media failed to load or play
    Failed {
        /// Error message
        message: String,
    },
}

/// Device outcomes the surface reports to its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceSignal {
    /// The bound media reached its end
    Ended,

    /// The bound media failed
    Failed {
        /// Error message
        message: String,
    },
}

