/// Simulated media device driven by a wall clock
///
/// Stands in for a real audio engine: it "plays" a media URL by advancing
/// a position on a background thread and reports through the binding's
/// event sender exactly like a native element would.
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use podcastr_playback::{DeviceError, DeviceEvent, DeviceEventSender, DeviceResult, MediaDevice};
use std::collections::HashMap;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

enum Control {
    Bind {
        duration: Duration,
        events: DeviceEventSender,
    },
    Unbind,
    Start,
    Stop,
    Seek(Duration),
    SetLooping(bool),
    Shutdown,
}

/// Clock-backed `MediaDevice`
///
/// Only URLs registered in the catalog can be bound; the catalog supplies
/// the duration a real engine would read from the media headers.
pub struct ClockDevice {
    catalog: HashMap<String, Duration>,
    control: Sender<Control>,
    worker: Option<JoinHandle<()>>,
}

impl ClockDevice {
    /// Spawn the clock thread
    pub fn new(tick: Duration) -> Self {
        let (control, rx) = crossbeam_channel::unbounded();
        let worker = thread::Builder::new()
            .name("podcastr-clock".into())
            .spawn(move || run_clock(&rx, tick))
            .map_err(|e| warn!(error = %e, "Failed to spawn clock thread"))
            .ok();

        Self {
            catalog: HashMap::new(),
            control,
            worker,
        }
    }

    /// Make a media URL playable
    pub fn register(&mut self, media_url: impl Into<String>, duration: Duration) {
        self.catalog.insert(media_url.into(), duration);
    }

    fn send(&self, control: Control) -> DeviceResult<()> {
        self.control
            .send(control)
            .map_err(|_| DeviceError::Command("clock thread stopped".into()))
    }
}

impl MediaDevice for ClockDevice {
    fn bind(&mut self, media_url: &str, events: DeviceEventSender) -> DeviceResult<()> {
        let duration = *self
            .catalog
            .get(media_url)
            .ok_or_else(|| DeviceError::Load(format!("unknown media: {}", media_url)))?;

        self.send(Control::Bind { duration, events })
    }

    fn unbind(&mut self) {
        self.send(Control::Unbind).ok();
    }

    fn start(&mut self) -> DeviceResult<()> {
        self.send(Control::Start)
    }

    fn stop(&mut self) {
        self.send(Control::Stop).ok();
    }

    fn seek(&mut self, position: Duration) -> DeviceResult<()> {
        self.send(Control::Seek(position))
    }

    fn set_looping(&mut self, looping: bool) {
        self.send(Control::SetLooping(looping)).ok();
    }
}

impl Drop for ClockDevice {
    fn drop(&mut self) {
        self.control.send(Control::Shutdown).ok();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Clock thread panicked");
            }
        }
    }
}

// ===== Clock Thread =====

#[derive(Default)]
struct Media {
    events: Option<DeviceEventSender>,
    duration: Duration,
    position: Duration,
    playing: bool,
    looping: bool,
}

impl Media {
    fn emit(&mut self, event: DeviceEvent) {
        let Some(events) = &self.events else {
            return;
        };
        if events.send(event).is_err() {
            // Surface moved on; stop producing for this binding
            debug!("Binding detached, going idle");
            self.events = None;
            self.playing = false;
        }
    }

    fn apply(&mut self, control: Control) {
        match control {
            Control::Bind { duration, events } => {
                self.events = Some(events);
                self.duration = duration;
                self.position = Duration::ZERO;
                self.playing = false;
                self.emit(DeviceEvent::MetadataReady { duration });
            }
            Control::Unbind => {
                self.events = None;
                self.playing = false;
            }
            Control::Start => {
                if self.events.is_some() && !self.playing {
                    if self.position >= self.duration {
                        self.position = Duration::ZERO;
                    }
                    self.playing = true;
                    self.emit(DeviceEvent::Started);
                }
            }
            Control::Stop => {
                if self.playing {
                    self.playing = false;
                    self.emit(DeviceEvent::Paused);
                }
            }
            Control::Seek(target) => {
                self.position = target.min(self.duration);
                let elapsed = self.position;
                self.emit(DeviceEvent::PositionChanged { elapsed });
            }
            Control::SetLooping(looping) => self.looping = looping,
            Control::Shutdown => {}
        }
    }

    fn advance(&mut self, by: Duration) {
        if !self.playing {
            return;
        }

        self.position += by;
        if self.position < self.duration {
            let elapsed = self.position;
            self.emit(DeviceEvent::PositionChanged { elapsed });
            return;
        }

        if self.looping {
            self.position = Duration::ZERO;
            self.emit(DeviceEvent::PositionChanged {
                elapsed: Duration::ZERO,
            });
        } else {
            self.position = self.duration;
            self.playing = false;
            let elapsed = self.position;
            self.emit(DeviceEvent::PositionChanged { elapsed });
            self.emit(DeviceEvent::Ended);
        }
    }
}

fn run_clock(rx: &Receiver<Control>, tick: Duration) {
    let mut media = Media::default();
    let mut last = Instant::now();

    loop {
        match rx.recv_timeout(tick) {
            Ok(Control::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(control) => {
                let was_playing = media.playing;
                media.apply(control);
                if media.playing && !was_playing {
                    last = Instant::now();
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        let now = Instant::now();
        if now.duration_since(last) >= tick {
            media.advance(now.duration_since(last));
            last = now;
        }
    }

    debug!("Clock thread stopped");
}
