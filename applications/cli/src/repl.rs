/// Line-oriented player commands and text rendering
use crate::error::{CliError, Result};
use podcastr_core::{time, Episode};
use podcastr_playback::{MediaDevice, PlayerControls, PlayerEvent, PlayerSession};
use std::fmt::Write;
use std::time::Duration;

pub const HELP: &str = "\
commands:
  play N     play episode N alone
  all N      play the whole list starting at episode N
  toggle     play/pause
  next       next episode
  prev       previous episode
  loop       toggle repeat
  shuffle    toggle shuffle
  seek SECS  jump to a position
  clear      stop and empty the queue
  status     show what is playing
  queue      show the queue
  help       show this help
  quit       exit";

/// One parsed REPL line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1-based position in the episode list
    Play(usize),
    /// 1-based position in the episode list
    All(usize),
    Toggle,
    Next,
    Previous,
    Loop,
    Shuffle,
    Seek(Duration),
    Clear,
    Status,
    Queue,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match name.to_ascii_lowercase().as_str() {
            "play" | "p" => Self::Play(position(arg)?),
            "all" | "a" => Self::All(position(arg)?),
            "toggle" | "t" => Self::Toggle,
            "next" | "n" => Self::Next,
            "prev" | "previous" => Self::Previous,
            "loop" | "repeat" => Self::Loop,
            "shuffle" | "s" => Self::Shuffle,
            "seek" => Self::Seek(seconds(arg)?),
            "clear" => Self::Clear,
            "status" | "st" => Self::Status,
            "queue" | "q" => Self::Queue,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn position(arg: Option<&str>) -> Result<usize> {
    let arg = arg.ok_or_else(|| CliError::BadArgument("expected an episode number".into()))?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CliError::BadArgument(format!(
            "{:?} is not an episode number",
            arg
        ))),
    }
}

fn seconds(arg: Option<&str>) -> Result<Duration> {
    let arg = arg.ok_or_else(|| CliError::BadArgument("expected seconds".into()))?;
    arg.parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| CliError::BadArgument(format!("{:?} is not a position", arg)))
}

/// Reject commands whose control is disabled
fn check_enabled(controls: PlayerControls, command: Command) -> Result<()> {
    let (enabled, name) = match command {
        Command::Toggle => (controls.play_pause, "play/pause"),
        Command::Next => (controls.next, "next"),
        Command::Previous => (controls.previous, "previous"),
        Command::Loop => (controls.repeat, "repeat"),
        Command::Shuffle => (controls.shuffle, "shuffle"),
        Command::Seek(_) => (controls.seek, "seek"),
        _ => return Ok(()),
    };

    if enabled {
        Ok(())
    } else {
        Err(CliError::Disabled(name))
    }
}

/// Apply a command to the session
///
/// Commands are gated on the player's enabled controls. Returns text to
/// show, if any. `Quit` is left to the caller.
pub fn execute<D: MediaDevice>(
    session: &mut PlayerSession<D>,
    episodes: &[Episode],
    command: Command,
) -> Result<Option<String>> {
    check_enabled(session.controls(), command)?;

    match command {
        Command::Play(n) => {
            let episode = n
                .checked_sub(1)
                .and_then(|i| episodes.get(i))
                .ok_or(CliError::NoSuchEpisode(n))?;
            session.play(episode.clone());
        }
        Command::All(n) => {
            let index = n
                .checked_sub(1)
                .filter(|i| *i < episodes.len())
                .ok_or(CliError::NoSuchEpisode(n))?;
            session.play_list(episodes.to_vec(), index)?;
        }
        Command::Toggle => session.toggle_play(),
        Command::Next => session.play_next(),
        Command::Previous => session.play_previous(),
        Command::Loop => session.toggle_loop(),
        Command::Shuffle => session.toggle_shuffle(),
        Command::Seek(target) => session.seek(target)?,
        Command::Clear => session.clear_player_state(),
        Command::Status => return Ok(Some(render_status(session))),
        Command::Queue => return Ok(Some(render_queue(session))),
        Command::Help => return Ok(Some(HELP.to_string())),
        Command::Quit => {}
    }
    Ok(None)
}

// ===== Rendering =====

/// Numbered episode table
pub fn render_episodes(episodes: &[Episode]) -> String {
    if episodes.is_empty() {
        return "No episodes".to_string();
    }

    let mut out = String::new();
    for (i, episode) in episodes.iter().enumerate() {
        let published = episode
            .published_at
            .as_ref()
            .map(time::format_published)
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}. {}  |  {}  |  {}  |  {}",
            i + 1,
            episode.title,
            episode.members,
            published,
            time::duration_to_time_string(episode.duration)
        );
    }
    out.truncate(out.trim_end().len());
    out
}

/// Full detail of one episode
pub fn render_episode(episode: &Episode) -> String {
    let mut out = format!("{}\n{}", episode.title, episode.members);
    if let Some(published) = &episode.published_at {
        let _ = write!(out, "\n{}", time::format_published(published));
    }
    let _ = write!(
        out,
        "\n{}\n{}",
        time::duration_to_time_string(episode.duration),
        episode.media_url
    );
    if let Some(description) = &episode.description {
        let _ = write!(out, "\n\n{}", description);
    }
    out
}

/// One-line player status
pub fn render_status<D: MediaDevice>(session: &PlayerSession<D>) -> String {
    let Some(episode) = session.current_episode() else {
        return "Nothing playing".to_string();
    };

    let controller = session.controller();
    let state = if controller.is_playing() { ">" } else { "||" };
    let total = session.duration().unwrap_or(episode.duration);

    let mut out = format!(
        "{} {}  {} / {}",
        state,
        episode.title,
        time::duration_to_time_string(session.elapsed()),
        time::duration_to_time_string(total)
    );
    if controller.is_looping() {
        out.push_str("  [loop]");
    }
    if controller.is_shuffling() {
        out.push_str("  [shuffle]");
    }
    let _ = write!(out, "\n{}", render_controls(session.controls()));
    out
}

/// Control strip; disabled controls are shown as `-`
pub fn render_controls(controls: PlayerControls) -> String {
    [
        (controls.previous, "prev"),
        (controls.play_pause, "play/pause"),
        (controls.next, "next"),
        (controls.shuffle, "shuffle"),
        (controls.repeat, "loop"),
        (controls.seek, "seek"),
    ]
    .iter()
    .map(|(enabled, name)| if *enabled { *name } else { "-" })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Queue listing with the current episode marked
pub fn render_queue<D: MediaDevice>(session: &PlayerSession<D>) -> String {
    let controller = session.controller();
    if controller.is_empty() {
        return "Queue is empty".to_string();
    }

    controller
        .queue()
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            let marker = if i == controller.current_index() { "*" } else { " " };
            format!("{} {:>3}. {}", marker, i + 1, episode.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text for a controller event worth telling the listener about
pub fn describe_event<D: MediaDevice>(
    session: &PlayerSession<D>,
    event: &PlayerEvent,
) -> Option<String> {
    match event {
        PlayerEvent::EpisodeChanged {
            episode_id, index, ..
        } => session
            .controller()
            .queue()
            .get(*index)
            .filter(|episode| episode.id == *episode_id)
            .or_else(|| {
                session
                    .controller()
                    .queue()
                    .iter()
                    .find(|episode| episode.id == *episode_id)
            })
            .map(|episode| format!("Now playing: {}", episode.title)),
        PlayerEvent::LoopChanged { is_looping } => Some(format!(
            "Repeat {}",
            if *is_looping { "on" } else { "off" }
        )),
        PlayerEvent::ShuffleChanged { is_shuffling } => Some(format!(
            "Shuffle {}",
            if *is_shuffling { "on" } else { "off" }
        )),
        PlayerEvent::Cleared => Some("Player cleared".to_string()),
        PlayerEvent::StateChanged { .. } | PlayerEvent::QueueChanged { .. } => None,
    }
}
