use std::time::Duration;

use crate::playback::Playback;
use crate::utils::DEFAULT_PLAYBACK_INTERVAL;

pub struct PlaybackBuilder {
    total: usize,
    interval: Option<Duration>,
    start: Option<usize>,
}

impl PlaybackBuilder {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            interval: None,
            start: None,
        }
    }
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }
    /// Initial cursor position; clamped to the last step on build.
    pub fn starting_at(mut self, step: usize) -> Self {
        self.start = Some(step);
        self
    }
    pub fn build(self) -> Playback {
        let mut playback =
            Playback::with_interval(self.total, self.interval.unwrap_or(DEFAULT_PLAYBACK_INTERVAL));
        if let Some(step) = self.start {
            playback.go_to(step);
        }
        playback
    }
}
