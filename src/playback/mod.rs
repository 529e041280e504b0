//! Playback preview.
//!
//! The [`PlaybackScheduler`] steps through the frame sequence at the
//! session's frame rate, writing each frame onto the editing surface.
//! It is driven by a [`PeriodicTask`]: the owner calls
//! [`PlaybackScheduler::poll`] from its event loop (or [`tick`] directly
//! when it has its own timer).
//!
//! [`tick`]: PlaybackScheduler::tick

mod task;

pub use task::{PeriodicTask, MIN_INTERVAL};

use std::time::{Duration, Instant};

use crate::document::FrameRate;
use crate::store::FrameStore;

/// Playback position and timer state.
#[derive(Debug, Clone, Default)]
pub struct PlaybackScheduler {
    /// Whether ticks advance the animation
    playing: bool,
    /// Index of the frame the next tick will show
    current_index: usize,
    /// Periodic schedule driving `poll`
    task: PeriodicTask,
}

impl PlaybackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Index of the frame the next tick will show.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Start playing from the first frame.
    ///
    /// Returns the tick interval, or `None` (doing nothing) when there
    /// are no frames to play.
    pub fn start(&mut self, store: &FrameStore, fps: FrameRate, now: Instant) -> Option<Duration> {
        if store.is_empty() {
            tracing::debug!("playback not started: no frames");
            return None;
        }

        let interval = fps.interval();
        self.current_index = 0;
        self.playing = true;
        self.task.start(interval, now);

        tracing::debug!(frames = store.len(), %fps, interval_ms = interval.as_millis() as u64, "playback started");
        Some(interval)
    }

    /// Stop playing. The position is kept.
    pub fn stop(&mut self) {
        self.playing = false;
        self.task.cancel();
        tracing::debug!(index = self.current_index, "playback stopped");
    }

    /// Show the current frame and advance, wrapping at the end.
    ///
    /// Returns the index of the frame that was shown. If the sequence
    /// emptied while playing, playback stops.
    pub fn tick(&mut self, store: &mut FrameStore) -> Option<usize> {
        if !self.playing {
            return None;
        }
        if store.is_empty() {
            self.stop();
            return None;
        }

        // The sequence may have shrunk since the last tick
        let shown = self.current_index % store.len();
        let frame = store.get(shown).ok()?.clone();
        store.load_into_editing_surface(&frame);
        self.current_index = (shown + 1) % store.len();
        Some(shown)
    }

    /// Tick if the schedule says one is due at `now`.
    pub fn poll(&mut self, store: &mut FrameStore, now: Instant) -> Option<usize> {
        if self.task.poll(now) {
            self.tick(store)
        } else {
            None
        }
    }

    /// When the next scheduled tick is due, while playing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.task.next_deadline()
    }
}
