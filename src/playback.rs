//! Step-by-step playback over a finished trace.
//!
//! A [`Playback`] is a cursor into a step log of fixed length plus a
//! play/pause flag. It owns no timer: whoever drives it calls [`Playback::tick`]
//! every [`Playback::interval`] while [`Playback::is_playing`] is true.
//!
//! Manual navigation (`next`, `prev`, `go_to`, `reset`) always pauses, and
//! reaching the last step stops playback.

use std::time::Duration;

use crate::utils::DEFAULT_PLAYBACK_INTERVAL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    total: usize,
    current: usize,
    playing: bool,
    interval: Duration,
}

impl Playback {
    /// Cursor at step 0 over `total` steps, paused, with the default interval.
    pub fn new(total: usize) -> Self {
        Self::with_interval(total, DEFAULT_PLAYBACK_INTERVAL)
    }

    pub fn with_interval(total: usize, interval: Duration) -> Self {
        Self {
            total,
            current: 0,
            playing: false,
            interval,
        }
    }

    fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn can_go_next(&self) -> bool {
        self.current < self.last()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    /// Start playing, unless already on the last step.
    pub fn play(&mut self) {
        if self.can_go_next() {
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.last());
        self.playing = false;
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
        self.playing = false;
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
    }

    /// Jump to `step`, clamped to the valid range.
    pub fn go_to(&mut self, step: usize) {
        self.current = step.min(self.last());
        self.playing = false;
    }

    /// Timer callback. Advances one step while playing and returns whether it
    /// moved; arriving on the last step stops playback.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if !self.can_go_next() {
            self.playing = false;
            return false;
        }
        self.current += 1;
        if self.current >= self.last() {
            self.playing = false;
        }
        true
    }

    /// The record under the cursor, if `steps` has one there.
    pub fn current_step<'a, S>(&self, steps: &'a [S]) -> Option<&'a S> {
        steps.get(self.current)
    }
}
