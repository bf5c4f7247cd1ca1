//! Podcastr - Playback Management
//!
//! Platform-agnostic playback queue management for Podcastr.
//!
//! This crate provides:
//! - Episode queue with index-based previous/next
//! - Transport, loop and shuffle flags
//! - Random "next" selection for shuffle mode
//! - A surface that binds the queue to a native media device and
//!   reconciles the device's own play/pause/position reports
//!
//! # Architecture
//!
//! `podcastr-playback` never decodes or streams audio. The platform
//! provides a [`MediaDevice`]; the crate decides what should be playing and
//! keeps its state truthful relative to what the device reports.
//!
//! - [`QueueController`]: what to play. Pure, synchronous state transitions.
//! - [`PlaybackSurface`]: how to realize it. Watches the controller,
//!   commands the device, feeds device events back through
//!   [`PlaybackFeedback`] only.
//! - [`PlayerSession`]: owns both for the lifetime of the app.
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::QueueController;
//! use std::time::Duration;
//!
//! let episodes: Vec<Episode> = ["a", "b", "c"]
//!     .into_iter()
//!     .map(|id| Episode::new(id, id, format!("https://cdn/{id}.m4a"), Duration::from_secs(60)))
//!     .collect();
//!
//! let mut controller = QueueController::default();
//! controller.play_list(episodes, 0).unwrap();
//!
//! controller.play_next();
//! assert_eq!(controller.current_episode().unwrap().id.as_str(), "b");
//! assert!(controller.has_previous());
//! assert!(controller.has_next());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_playback::{
//!     DeviceEvent, DeviceEventSender, DeviceResult, MediaDevice, PlayerConfig, PlayerSession,
//! };
//! use std::time::Duration;
//!
//! // Implement MediaDevice for your platform
//! struct MyAudioElement {
//!     events: Option<DeviceEventSender>,
//! }
//!
//! impl MediaDevice for MyAudioElement {
//!     fn bind(&mut self, media_url: &str, events: DeviceEventSender) -> DeviceResult<()> {
//!         // Load media_url; wire the engine's callbacks to `events`
//!         self.events = Some(events);
//!         Ok(())
//!     }
//!
//!     fn unbind(&mut self) {
//!         self.events = None;
//!     }
//!
//!     fn start(&mut self) -> DeviceResult<()> {
//!         if let Some(events) = &self.events {
//!             events.send(DeviceEvent::Started).ok();
//!         }
//!         Ok(())
//!     }
//!
//!     fn stop(&mut self) {}
//!
//!     fn seek(&mut self, _position: Duration) -> DeviceResult<()> {
//!         Ok(())
//!     }
//!
//!     fn set_looping(&mut self, _looping: bool) {}
//! }
//!
//! let mut session = PlayerSession::new(PlayerConfig::default(), MyAudioElement { events: None });
//!
//! // Call from the UI loop to apply device reports
//! session.tick();
//! ```

mod controller;
mod device;
mod error;
mod events;
mod feedback;
mod queue;
mod session;
mod shuffle;
mod surface;
pub mod types;

// Public exports
pub use controller::QueueController;
pub use device::{DeviceEventSender, DeviceResult, MediaDevice};
pub use error::{DeviceError, PlaybackError, Result};
pub use events::{DeviceEvent, PlayerEvent, SurfaceSignal};
pub use feedback::PlaybackFeedback;
pub use queue::Queue;
pub use session::{PlayerSession, SharedSession};
pub use surface::PlaybackSurface;
pub use types::{PlaybackFlags, PlayerConfig, PlayerControls};
