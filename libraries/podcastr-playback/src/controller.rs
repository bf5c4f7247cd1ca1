//! Queue controller - which episode is current and what the listener wants
//!
//! Every command is a synchronous state transition. The controller never
//! talks to a device; `PlaybackSurface` observes it and realizes the intent.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    feedback::PlaybackFeedback,
    queue::Queue,
    shuffle::ShuffleDraw,
    types::{PlaybackFlags, PlayerConfig, PlayerControls},
};
use podcastr_core::{Episode, EpisodeId};
use tracing::debug;

/// Central queue management
///
/// Owns the episode queue, the current position and the playback flags.
/// Designed to be callable in any state: on an empty queue every
/// navigation command is a no-op, and nothing panics. Gating ("is this
/// allowed right now") is left to the caller, usually through
/// [`QueueController::controls`].
#[derive(Debug)]
pub struct QueueController {
    queue: Queue,
    flags: PlaybackFlags,
    shuffle: ShuffleDraw,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl QueueController {
    /// Create new controller with an empty queue
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            queue: Queue::new(),
            flags: PlaybackFlags {
                is_playing: false,
                is_looping: config.looping,
                is_shuffling: config.shuffling,
            },
            shuffle: ShuffleDraw::new(config.shuffle_seed),
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Play a single episode
    ///
    /// Replaces the queue with `[episode]` and starts playing.
    pub fn play(&mut self, episode: Episode) {
        let previous = self.current_episode_id();
        debug!(episode_id = %episode.id, "Playing single episode");

        self.queue.set_single(episode);
        self.emit_queue_changed();
        self.emit_episode_changed(previous);
        self.apply_playing(true);
    }

    /// Play a list of episodes starting at `index`
    ///
    /// Queue and position are replaced together. An `index` that does not
    /// address an element of `list` is rejected and nothing changes.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        let len = list.len();
        let previous = self.current_episode_id();

        if !self.queue.replace(list, index) {
            return Err(PlaybackError::IndexOutOfBounds { index, len });
        }

        debug!(len, index, "Playing episode list");
        self.emit_queue_changed();
        self.emit_episode_changed(previous);
        self.apply_playing(true);
        Ok(())
    }

    /// Empty the queue
    ///
    /// Flags are kept so the next `play` honours the listener's loop and
    /// shuffle preference.
    pub fn clear_player_state(&mut self) {
        debug!(len = self.queue.len(), "Clearing player state");
        self.queue.clear();
        self.pending_events.push(PlayerEvent::Cleared);
    }

    // ===== Transport =====

    /// Flip the playing flag
    ///
    /// Only changes intent; the surface reacts by starting or stopping the
    /// device.
    pub fn toggle_play(&mut self) {
        self.apply_playing(!self.flags.is_playing);
    }

    /// Overwrite the playing flag with what the device really did
    pub fn set_playing_state(&mut self, playing: bool) {
        self.apply_playing(playing);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.flags.is_looping = !self.flags.is_looping;
        debug!(is_looping = self.flags.is_looping, "Loop toggled");
        self.pending_events.push(PlayerEvent::LoopChanged {
            is_looping: self.flags.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.flags.is_shuffling = !self.flags.is_shuffling;
        debug!(is_shuffling = self.flags.is_shuffling, "Shuffle toggled");
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            is_shuffling: self.flags.is_shuffling,
        });
    }

    // ===== Navigation =====

    /// Move to the next episode
    ///
    /// In shuffle mode a uniformly random position is drawn, which may be
    /// the current one. Otherwise advances by one, or stays on the last
    /// episode when there is nothing after it.
    pub fn play_next(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let previous = self.current_episode_id();
        let previous_index = self.queue.current_index();

        if self.flags.is_shuffling {
            if let Some(index) = self.shuffle.pick(self.queue.len()) {
                self.queue.jump_to(index);
            }
        } else if !self.queue.advance() {
            debug!(index = previous_index, "Already at last episode");
            return;
        }

        if self.queue.current_index() != previous_index {
            self.emit_episode_changed(previous);
        }
    }

    /// Move to the previous episode, or stay on the first one
    pub fn play_previous(&mut self) {
        let previous = self.current_episode_id();
        if self.queue.go_back() {
            self.emit_episode_changed(previous);
        }
    }

    // ===== State Queries =====

    /// Check if there is an episode before the current one
    pub fn has_previous(&self) -> bool {
        self.queue.can_go_back()
    }

    /// Check if next would move somewhere
    ///
    /// Always true while shuffling, since a random draw is always possible.
    pub fn has_next(&self) -> bool {
        self.flags.is_shuffling || self.queue.can_advance()
    }

    /// Currently selected episode
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    /// Position of the current episode (0 when empty)
    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    /// All queued episodes in order
    pub fn queue(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Queue length
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Snapshot of all flags
    pub fn flags(&self) -> PlaybackFlags {
        self.flags
    }

    pub fn is_playing(&self) -> bool {
        self.flags.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.flags.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.flags.is_shuffling
    }

    /// Which controls a UI should enable
    pub fn controls(&self) -> PlayerControls {
        if self.current_episode().is_none() {
            return PlayerControls::default();
        }

        PlayerControls {
            play_pause: true,
            previous: self.has_previous(),
            next: self.has_next(),
            shuffle: self.queue.len() > 1,
            repeat: true,
            seek: true,
        }
    }

    // ===== Events =====

    /// Drain pending events
    ///
    /// The UI should call this after each command or tick to stay in sync.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn current_episode_id(&self) -> Option<EpisodeId> {
        self.queue.current().map(|episode| episode.id.clone())
    }

    fn apply_playing(&mut self, playing: bool) {
        if self.flags.is_playing != playing {
            self.flags.is_playing = playing;
            debug!(is_playing = playing, "Playing state changed");
            self.pending_events
                .push(PlayerEvent::StateChanged { is_playing: playing });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn emit_episode_changed(&mut self, previous_episode_id: Option<EpisodeId>) {
        if let Some(episode) = self.queue.current() {
            self.pending_events.push(PlayerEvent::EpisodeChanged {
                episode_id: episode.id.clone(),
                index: self.queue.current_index(),
                previous_episode_id,
            });
        }
    }
}

impl Default for QueueController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlaybackFeedback for QueueController {
    fn set_playing_state(&mut self, playing: bool) {
        QueueController::set_playing_state(self, playing);
    }
}
