//! Player UI state. Playback itself belongs to the `<audio>` element.

use trivix_types::TrackInfo;

pub const ACTIVE_TRACK_CLASS: &str = "text-green-400";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Play,
    Pause,
}

impl PlayCommand {
    /// Icon the toggle shows after the command was issued.
    pub fn icon(self) -> &'static str {
        match self {
            PlayCommand::Play => "pause",
            PlayCommand::Pause => "play",
        }
    }
}

/// Highlight changes for a track click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub deactivate: Option<usize>,
    pub activate: usize,
}

#[derive(Debug, Default)]
pub struct PlayerState {
    playing: bool,
    current: Option<usize>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Index (among the registered track buttons) holding the highlight.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn toggle(&mut self) -> PlayCommand {
        let command = if self.playing {
            PlayCommand::Pause
        } else {
            PlayCommand::Play
        };
        self.playing = !self.playing;
        command
    }

    pub fn select(&mut self, index: usize) -> Selection {
        let previous = self.current.replace(index);
        Selection {
            deactivate: previous.filter(|&p| p != index),
            activate: index,
        }
    }
}

/// Percentage for the progress bar, `None` while the duration is unknown.
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return None;
    }
    Some(current / duration * 100.0)
}

/// `m:ss`, both parts floored.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_owned();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins}:{secs:02}")
}

/// Slider value (0..=100) to media volume (0.0..=1.0).
pub fn volume_from_slider(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    (value / 100.0).clamp(0.0, 1.0)
}

pub fn now_playing_line(track: &TrackInfo) -> String {
    format!("Playing: {} by {}", track.title, track.artist)
}
