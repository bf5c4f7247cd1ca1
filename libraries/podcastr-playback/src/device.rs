//! Platform-agnostic media device trait
//!
//! Abstracts the native playback engine (an HTML audio element, a desktop
//! audio stack, a test double). Decoding and streaming happen entirely
//! behind this trait.

use crate::error::DeviceError;
use crate::events::DeviceEvent;
use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;

/// Device result type
pub type DeviceResult<T> = std::result::Result<T, DeviceError>;

/// Platform-agnostic media device
///
/// The surface binds exactly one media source at a time. On `bind` the
/// device receives a fresh [`DeviceEventSender`]; it must report every real
/// transport change (started, paused, metadata, position, end) through it,
/// from any thread. After `unbind` that sender is dead and further sends
/// fail with [`DeviceError::Detached`].
pub trait MediaDevice: Send {
    /// Load a media source and attach its event sender
    fn bind(&mut self, media_url: &str, events: DeviceEventSender) -> DeviceResult<()>;

    /// Release the current media source
    ///
    /// Unconditional and immediate.
    fn unbind(&mut self);

    /// Start or resume audio
    fn start(&mut self) -> DeviceResult<()>;

    /// Pause audio
    fn stop(&mut self);

    /// Jump to a position in the current media
    fn seek(&mut self, position: Duration) -> DeviceResult<()>;

    /// Repeat the current media natively instead of ending
    fn set_looping(&mut self, looping: bool);
}

/// Sending half of one binding's event channel
///
/// Cheap to clone; hand copies to whatever callbacks the media engine runs.
#[derive(Debug, Clone)]
pub struct DeviceEventSender {
    tx: Sender<DeviceEvent>,
}

impl DeviceEventSender {
    /// Report an event to the surface
    ///
    /// Fails with [`DeviceError::Detached`] once the binding was released.
    pub fn send(&self, event: DeviceEvent) -> DeviceResult<()> {
        self.tx.send(event).map_err(|_| DeviceError::Detached)
    }
}

/// Create the channel for a new binding
pub(crate) fn binding_channel() -> (DeviceEventSender, Receiver<DeviceEvent>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (DeviceEventSender { tx }, rx)
}
