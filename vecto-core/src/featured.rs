//! Hero panel playback: autoplay reveal and simulated load latency

use std::time::Duration;

use tracing::{debug, trace};
use vecto_model::Video;

use crate::schedule::{Scheduler, TaskHandle};

pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Deferred events for [`FeaturedVideo::update`].
///
/// `generation` identifies the selection that scheduled the message; a
/// message from an older selection is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedMessage {
    AutoplayReveal { generation: u64 },
    LoadFinished { generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_loading: bool,
    /// Seconds
    pub current_time: f64,
    /// Seconds
    pub duration: f64,
    pub volume: f32,
    pub is_muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_loading: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            is_muted: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedDelays {
    pub autoplay: Duration,
    pub load: Duration,
}

impl Default for FeaturedDelays {
    fn default() -> Self {
        Self {
            autoplay: DEFAULT_AUTOPLAY_DELAY,
            load: DEFAULT_LOAD_DELAY,
        }
    }
}

/// Featured video selection and its playback timers.
///
/// Selecting a new video cancels every timer the previous selection
/// scheduled.
#[derive(Debug)]
pub struct FeaturedVideo {
    video: Option<Video>,
    playback: PlaybackState,
    is_playing_background: bool,
    show_video_player: bool,
    generation: u64,
    delays: FeaturedDelays,
    scheduler: Scheduler<FeaturedMessage>,
    pending_autoplay: Option<TaskHandle>,
    pending_load: Option<TaskHandle>,
}

impl FeaturedVideo {
    pub fn new(scheduler: Scheduler<FeaturedMessage>, delays: FeaturedDelays) -> Self {
        Self {
            video: None,
            playback: PlaybackState::default(),
            is_playing_background: false,
            show_video_player: false,
            generation: 0,
            delays,
            scheduler,
            pending_autoplay: None,
            pending_load: None,
        }
    }

    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn is_playing_background(&self) -> bool {
        self.is_playing_background
    }

    pub fn show_video_player(&self) -> bool {
        self.show_video_player
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_autoplay(&self) -> bool {
        self.pending_autoplay
            .as_ref()
            .is_some_and(TaskHandle::is_pending)
    }

    pub fn has_pending_load(&self) -> bool {
        self.pending_load.as_ref().is_some_and(TaskHandle::is_pending)
    }

    /// Replace the featured video. Must be called inside a tokio runtime.
    pub fn select(&mut self, video: Video) {
        self.cancel_timers();
        self.generation += 1;

        self.playback.is_playing = false;
        self.playback.is_loading = false;
        self.playback.current_time = 0.0;
        self.is_playing_background = false;
        self.show_video_player = false;

        if video.is_playable() {
            self.pending_autoplay = Some(self.scheduler.after(
                self.delays.autoplay,
                FeaturedMessage::AutoplayReveal {
                    generation: self.generation,
                },
            ));
        }
        debug!(
            id = %video.id,
            generation = self.generation,
            autoplay = video.is_playable(),
            "featured video selected"
        );
        self.video = Some(video);
    }

    /// Start the simulated load. No-op without a video.
    pub fn play(&mut self) {
        if self.video.is_none() {
            return;
        }
        self.playback.is_loading = true;
        self.pending_load = Some(self.scheduler.after(
            self.delays.load,
            FeaturedMessage::LoadFinished {
                generation: self.generation,
            },
        ));
    }

    pub fn pause(&mut self) {
        if let Some(mut load) = self.pending_load.take() {
            load.cancel();
        }
        self.playback.is_playing = false;
        self.playback.is_loading = false;
    }

    /// Playback reached the end: stop and rewind.
    pub fn ended(&mut self) {
        self.playback.is_playing = false;
        self.playback.current_time = 0.0;
    }

    pub fn set_current_time(&mut self, seconds: f64) {
        self.playback.current_time = seconds.max(0.0);
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.playback.duration = seconds.max(0.0);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.playback.volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.playback.is_muted = muted;
    }

    pub fn toggle_mute(&mut self) {
        self.playback.is_muted = !self.playback.is_muted;
    }

    pub fn update(&mut self, message: FeaturedMessage) {
        match message {
            FeaturedMessage::AutoplayReveal { generation } => {
                if generation != self.generation {
                    trace!(generation, current = self.generation, "stale autoplay reveal");
                    return;
                }
                self.pending_autoplay = None;
                self.is_playing_background = true;
                self.show_video_player = true;
                debug!(generation, "background playback revealed");
            }
            FeaturedMessage::LoadFinished { generation } => {
                if generation != self.generation || !self.playback.is_loading {
                    trace!(generation, current = self.generation, "stale load completion");
                    return;
                }
                self.pending_load = None;
                self.playback.is_loading = false;
                self.playback.is_playing = true;
            }
        }
    }

    fn cancel_timers(&mut self) {
        for mut handle in [self.pending_autoplay.take(), self.pending_load.take()]
            .into_iter()
            .flatten()
        {
            handle.cancel();
        }
    }
}
