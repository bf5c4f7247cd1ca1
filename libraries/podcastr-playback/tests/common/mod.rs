//! Shared helpers for playback integration tests

#![allow(dead_code)]

use podcastr_core::Episode;
use podcastr_playback::{DeviceError, DeviceEvent, DeviceEventSender, DeviceResult, MediaDevice};
use std::time::Duration;

/// Device command as observed by the test double
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Bind(String),
    Unbind,
    Start,
    Stop,
    Seek(Duration),
    SetLooping(bool),
}

/// Records every command and exposes the current binding's sender
#[derive(Default)]
pub struct RecordingDevice {
    pub commands: Vec<Command>,
    pub sender: Option<DeviceEventSender>,
    pub fail_bind: bool,
    pub fail_seek: bool,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send an event through the current binding
    pub fn emit(&self, event: DeviceEvent) {
        self.sender
            .as_ref()
            .expect("device is not bound")
            .send(event)
            .expect("binding detached");
    }

    pub fn count(&self, command: &Command) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }

    pub fn starts(&self) -> usize {
        self.count(&Command::Start)
    }

    pub fn stops(&self) -> usize {
        self.count(&Command::Stop)
    }
}

impl MediaDevice for RecordingDevice {
    fn bind(&mut self, media_url: &str, events: DeviceEventSender) -> DeviceResult<()> {
        self.commands.push(Command::Bind(media_url.to_string()));
        if self.fail_bind {
            return Err(DeviceError::Load("unsupported codec".into()));
        }
        self.sender = Some(events);
        Ok(())
    }

    fn unbind(&mut self) {
        self.commands.push(Command::Unbind);
        self.sender = None;
    }

    fn start(&mut self) -> DeviceResult<()> {
        self.commands.push(Command::Start);
        Ok(())
    }

    fn stop(&mut self) {
        self.commands.push(Command::Stop);
    }

    fn seek(&mut self, position: Duration) -> DeviceResult<()> {
        if self.fail_seek {
            return Err(DeviceError::Command("not seekable".into()));
        }
        self.commands.push(Command::Seek(position));
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) {
        self.commands.push(Command::SetLooping(looping));
    }
}

pub fn create_episode(id: &str, duration_secs: u64) -> Episode {
    Episode::new(
        id,
        format!("Episode {}", id),
        format!("https://cdn.example.com/{}.m4a", id),
        Duration::from_secs(duration_secs),
    )
    .with_members("Diego e Richard")
}

pub fn abc() -> Vec<Episode> {
    vec![
        create_episode("a", 1800),
        create_episode("b", 2400),
        create_episode("c", 3600),
    ]
}
