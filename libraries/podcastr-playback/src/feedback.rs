//! Device-to-controller feedback channel

/// The only controller capability a device adapter is given
///
/// `PlaybackSurface` receives `&mut impl PlaybackFeedback`, never the
/// controller itself, so the device side cannot change the queue, the
/// position, or the loop and shuffle flags.
pub trait PlaybackFeedback {
    /// Report whether the device is really playing
    fn set_playing_state(&mut self, playing: bool);
}
