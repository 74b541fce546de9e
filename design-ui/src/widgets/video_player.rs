//! Showcase video player.
//!
//! The host owns the media element. This type tracks what the controls show
//! and tells the host which media command to issue.

use std::time::Duration;

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Waiting for media metadata.
    Loading,
    Paused,
    /// Play was requested and the host has not reported the outcome yet.
    /// `pause_after` is set when the user paused in the meantime.
    PlayPending { pause_after: bool },
    Playing,
}

/// Command the host should issue to its media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoPlayer {
    playback: Playback,
    muted: bool,
    duration: f64,
    current_time: f64,
    progress: f64,
    controls_visible: bool,
    hide_after: Duration,
    hide_timer: Option<Duration>,
}

impl VideoPlayer {
    pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(3);

    pub fn new(hide_after: Duration) -> Self {
        Self {
            playback: Playback::Loading,
            muted: false,
            duration: 0.0,
            current_time: 0.0,
            progress: 0.0,
            controls_visible: false,
            hide_after,
            hide_timer: None,
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    /// The spinner shows while metadata loads and while a play is pending.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.playback,
            Playback::Loading | Playback::PlayPending { .. }
        )
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Playback progress as a percentage in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Media metadata arrived with the clip length in seconds.
    pub fn metadata_loaded(
        &mut self,
        duration: f64,
    ) {
        self.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        if self.playback == Playback::Loading {
            self.playback = Playback::Paused;
        }
        debug!(duration = self.duration, "video metadata loaded");
    }

    /// Play/pause button.
    pub fn toggle_play(&mut self) -> Option<PlayerCommand> {
        match self.playback {
            Playback::Loading => None,
            Playback::Paused => {
                self.playback = Playback::PlayPending { pause_after: false };
                Some(PlayerCommand::Play)
            }
            Playback::PlayPending { pause_after } => {
                // a pending play can't be cancelled; pause once it resolves
                self.playback = Playback::PlayPending {
                    pause_after: !pause_after,
                };
                None
            }
            Playback::Playing => {
                self.playback = Playback::Paused;
                Some(PlayerCommand::Pause)
            }
        }
    }

    /// The host's play request succeeded.
    pub fn play_started(&mut self) -> Option<PlayerCommand> {
        match self.playback {
            Playback::PlayPending { pause_after: true } => {
                self.playback = Playback::Paused;
                Some(PlayerCommand::Pause)
            }
            Playback::PlayPending { pause_after: false } => {
                self.playback = Playback::Playing;
                None
            }
            _ => None,
        }
    }

    /// The host's play request was rejected.
    pub fn play_failed(
        &mut self,
        reason: &str,
    ) {
        warn!(reason, "video play failed");
        if matches!(self.playback, Playback::PlayPending { .. }) {
            self.playback = Playback::Paused;
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Host reported the current playhead in seconds.
    pub fn time_update(
        &mut self,
        current: f64,
    ) {
        if !current.is_finite() {
            return;
        }
        self.current_time = current.max(0.0);
        self.progress = if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    /// Progress bar moved to `percent`. Returns the time in seconds the host
    /// should seek to.
    pub fn seek(
        &mut self,
        percent: f64,
    ) -> f64 {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.progress = percent;
        self.current_time = percent / 100.0 * self.duration;
        self.current_time
    }

    /// Pointer activity over the player: shows the controls and restarts
    /// the hide timer.
    pub fn show_controls(&mut self) {
        self.controls_visible = true;
        self.hide_timer = Some(Duration::ZERO);
    }

    /// Pointer left the player. A playing video hides its controls at once.
    pub fn pointer_left(&mut self) {
        if self.is_playing() {
            self.controls_visible = false;
            self.hide_timer = None;
        }
    }

    /// Advances time by `dt`. Controls hide when the timer expires while
    /// the video is playing.
    pub fn tick(
        &mut self,
        dt: Duration,
    ) {
        let Some(elapsed) = self.hide_timer.as_mut() else {
            return;
        };
        *elapsed += dt;
        if *elapsed >= self.hide_after {
            self.hide_timer = None;
            if self.is_playing() {
                self.controls_visible = false;
            }
        }
    }
}

impl Default for VideoPlayer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HIDE_AFTER)
    }
}

/// Formats seconds as `m:ss`. Negative and non-finite input reads as zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
