//! Playback surface - realizes controller intent on a media device
//!
//! The surface never decides what to play. It watches the controller
//! (`sync`) and turns changes into device commands, and it drains device
//! events (`pump`) and turns them into `set_playing_state` calls and
//! display values.
//!
//! Reconciliation rules:
//! - a new media URL unbinds the old source first, resets the elapsed
//!   position, binds the new source on a fresh channel, then autoplays if
//!   the listener wants playback
//! - each change of the playing flag yields exactly one start or stop
//! - a device report of started/paused updates the surface's own view
//!   before the controller, so the following `sync` does not echo it back
//!   as a command

use crate::{
    controller::QueueController,
    device::{binding_channel, MediaDevice},
    error::{PlaybackError, Result},
    events::{DeviceEvent, SurfaceSignal},
    feedback::PlaybackFeedback,
};
use crossbeam_channel::Receiver;
use std::time::Duration;
use tracing::{debug, warn};

/// One bound media source and its event stream
#[derive(Debug)]
struct Binding {
    media_url: String,
    events: Receiver<DeviceEvent>,
}

/// Bridges a `QueueController` to a `MediaDevice`
pub struct PlaybackSurface<D: MediaDevice> {
    device: D,
    binding: Option<Binding>,

    // Last state realized on the device
    is_playing: bool,
    is_looping: bool,

    // Display values
    elapsed: Duration,
    duration: Option<Duration>,
    sampling: bool,
}

impl<D: MediaDevice> PlaybackSurface<D> {
    /// Create a surface around an idle device
    pub fn new(device: D) -> Self {
        Self {
            device,
            binding: None,
            is_playing: false,
            is_looping: false,
            elapsed: Duration::ZERO,
            duration: None,
            sampling: false,
        }
    }

    /// React to controller changes since the last call
    ///
    /// Idempotent: calling it again without controller changes issues no
    /// device command.
    pub fn sync(&mut self, controller: &QueueController) {
        let flags = controller.flags();
        let media_url = controller
            .current_episode()
            .map(|episode| episode.media_url.as_str());

        if media_url != self.bound_url() {
            self.rebind(media_url, flags.is_looping, flags.is_playing);
            return;
        }

        if flags.is_looping != self.is_looping {
            self.is_looping = flags.is_looping;
            self.device.set_looping(flags.is_looping);
        }

        if flags.is_playing != self.is_playing {
            self.is_playing = flags.is_playing;
            if self.binding.is_none() {
                debug!(is_playing = flags.is_playing, "No media bound, nothing to start or stop");
            } else if flags.is_playing {
                self.start_device();
            } else {
                self.device.stop();
            }
        }
    }

    /// Apply queued device events
    ///
    /// Events are applied in the order the device sent them. Only started
    /// and paused reach the controller, via `feedback`. Ended and failures
    /// are handed back to the caller.
    pub fn pump(&mut self, feedback: &mut impl PlaybackFeedback) -> Vec<SurfaceSignal> {
        let events: Vec<DeviceEvent> = match &self.binding {
            Some(binding) => binding.events.try_iter().collect(),
            None => return Vec::new(),
        };

        let mut signals = Vec::new();
        for event in events {
            match event {
                DeviceEvent::Started => {
                    self.is_playing = true;
                    feedback.set_playing_state(true);
                }
                DeviceEvent::Paused => {
                    self.is_playing = false;
                    feedback.set_playing_state(false);
                }
                DeviceEvent::MetadataReady { duration } => {
                    debug!(duration_secs = duration.as_secs(), "Media metadata ready");
                    self.duration = Some(duration);
                    self.elapsed = Duration::ZERO;
                    self.sampling = true;
                }
                DeviceEvent::PositionChanged { elapsed } => {
                    if self.sampling {
                        self.elapsed = elapsed;
                    }
                }
                DeviceEvent::Ended => {
                    debug!(media_url = ?self.bound_url(), "Media ended");
                    signals.push(SurfaceSignal::Ended);
                }
                DeviceEvent::Failed { message } => {
                    warn!(media_url = ?self.bound_url(), error = %message, "Media device failed");
                    signals.push(SurfaceSignal::Failed { message });
                }
            }
        }

        signals
    }

    /// Seek the bound media
    ///
    /// The new position is shown immediately; later position reports from
    /// the device win if it lands elsewhere.
    pub fn seek(&mut self, target: Duration) -> Result<()> {
        if self.binding.is_none() {
            return Err(PlaybackError::NoEpisodeLoaded);
        }
        self.device.seek(target)?;
        self.elapsed = target;
        Ok(())
    }

    /// Play the bound media again from the start
    pub fn replay(&mut self) -> Result<()> {
        self.seek(Duration::ZERO)?;
        self.is_playing = true;
        self.device.start()?;
        Ok(())
    }

    /// Elapsed time of the bound media, for display
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total duration once metadata is known
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// URL of the bound media source
    pub fn bound_url(&self) -> Option<&str> {
        self.binding.as_ref().map(|binding| binding.media_url.as_str())
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    fn rebind(&mut self, media_url: Option<&str>, looping: bool, playing: bool) {
        if let Some(old) = self.binding.take() {
            debug!(media_url = %old.media_url, "Unbinding media");
            self.device.unbind();
            // Dropping the receiver detaches every sender of the old binding
            drop(old);
        }

        self.elapsed = Duration::ZERO;
        self.duration = None;
        self.sampling = false;
        self.is_looping = looping;
        self.is_playing = playing;

        let Some(media_url) = media_url else {
            return;
        };

        debug!(media_url, looping, playing, "Binding media");
        let (sender, events) = binding_channel();
        if let Err(e) = self.device.bind(media_url, sender) {
            warn!(media_url, error = %e, "Failed to bind media source");
        }
        self.binding = Some(Binding {
            media_url: media_url.to_string(),
            events,
        });

        self.device.set_looping(looping);
        if playing {
            self.start_device();
        }
    }

    fn start_device(&mut self) {
        if let Err(e) = self.device.start() {
            warn!(media_url = ?self.bound_url(), error = %e, "Device refused to start");
        }
    }
}
