//! Player session - one controller and one surface for the app lifetime
//!
//! The session is constructed explicitly and handed to the UI by
//! reference. Every command goes to the controller and is then reflected
//! on the device; `tick` brings device reports back in.

use crate::{
    controller::QueueController,
    device::MediaDevice,
    error::Result,
    events::{PlayerEvent, SurfaceSignal},
    surface::PlaybackSurface,
    types::{PlayerConfig, PlayerControls},
};
use podcastr_core::Episode;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Controller + surface pair driven from one context
pub struct PlayerSession<D: MediaDevice> {
    controller: QueueController,
    surface: PlaybackSurface<D>,
}

impl<D: MediaDevice> PlayerSession<D> {
    /// Create a session with an empty queue
    pub fn new(config: PlayerConfig, device: D) -> Self {
        let controller = QueueController::new(config);
        let mut surface = PlaybackSurface::new(device);
        surface.sync(&controller);
        Self {
            controller,
            surface,
        }
    }

    // ===== Commands =====

    pub fn play(&mut self, episode: Episode) {
        self.controller.play(episode);
        self.surface.sync(&self.controller);
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        self.controller.play_list(list, index)?;
        self.surface.sync(&self.controller);
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.controller.toggle_play();
        self.surface.sync(&self.controller);
    }

    pub fn toggle_loop(&mut self) {
        self.controller.toggle_loop();
        self.surface.sync(&self.controller);
    }

    pub fn toggle_shuffle(&mut self) {
        self.controller.toggle_shuffle();
        self.surface.sync(&self.controller);
    }

    pub fn play_next(&mut self) {
        self.controller.play_next();
        self.surface.sync(&self.controller);
    }

    pub fn play_previous(&mut self) {
        self.controller.play_previous();
        self.surface.sync(&self.controller);
    }

    pub fn clear_player_state(&mut self) {
        self.controller.clear_player_state();
        self.surface.sync(&self.controller);
    }

    /// Seek the current episode
    pub fn seek(&mut self, target: Duration) -> Result<()> {
        self.surface.seek(target)
    }

    /// Apply device reports and the end-of-episode policy
    ///
    /// When an episode ends the queue advances if there is another episode
    /// to move to, otherwise the player is cleared. A lone episode finishes
    /// even with shuffle on. Returns what the device reported.
    pub fn tick(&mut self) -> Vec<SurfaceSignal> {
        let signals = self.surface.pump(&mut self.controller);

        for signal in &signals {
            match signal {
                SurfaceSignal::Ended => self.handle_episode_ended(),
                SurfaceSignal::Failed { message } => {
                    debug!(error = %message, "Keeping last known state after device failure");
                }
            }
        }

        self.surface.sync(&self.controller);
        signals
    }

    fn handle_episode_ended(&mut self) {
        if !self.controller.has_next() || self.controller.len() <= 1 {
            info!("Reached end of queue");
            self.controller.clear_player_state();
            return;
        }

        let before = self.controller.current_index();
        self.controller.play_next();

        // A shuffle draw may land on the episode that just ended
        if self.controller.current_index() == before && self.controller.is_playing() {
            if let Err(e) = self.surface.replay() {
                warn!(error = %e, "Failed to replay episode");
            }
        }
    }

    // ===== State Queries =====

    pub fn controller(&self) -> &QueueController {
        &self.controller
    }

    pub fn surface(&self) -> &PlaybackSurface<D> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PlaybackSurface<D> {
        &mut self.surface
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.controller.current_episode()
    }

    pub fn controls(&self) -> PlayerControls {
        self.controller.controls()
    }

    pub fn elapsed(&self) -> Duration {
        self.surface.elapsed()
    }

    /// Duration reported by the media, falling back to the episode's own
    pub fn duration(&self) -> Option<Duration> {
        self.surface
            .duration()
            .or_else(|| self.current_episode().map(|episode| episode.duration))
    }

    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.controller.drain_events()
    }
}

/// Thread-safe handle for hosts whose UI runs on several threads
///
/// Every access goes through one mutex, so commands and device reports
/// are applied one at a time.
pub struct SharedSession<D: MediaDevice> {
    inner: Arc<Mutex<PlayerSession<D>>>,
}

impl<D: MediaDevice> SharedSession<D> {
    pub fn new(session: PlayerSession<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Lock the session, ignoring poisoning
    pub fn lock(&self) -> MutexGuard<'_, PlayerSession<D>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: MediaDevice> Clone for SharedSession<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
