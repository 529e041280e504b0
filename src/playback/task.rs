//! Cancellable periodic task.
//!
//! A toolkit-independent timer: the owner polls it with the current
//! time and it reports whether a tick is due. Nothing here sleeps or
//! spawns threads; the caller decides how to wait for
//! [`PeriodicTask::next_deadline`].

use std::time::{Duration, Instant};

/// Shortest interval the task will run at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Periodic schedule that can be started, polled and cancelled.
#[derive(Debug, Clone, Default)]
pub struct PeriodicTask {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PeriodicTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the schedule; the first tick is due one interval after `now`.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.interval = interval.max(MIN_INTERVAL);
        self.next_due = Some(now + self.interval);
    }

    /// Stop the schedule. No tick is reported until the next `start`.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Number of intervals that elapsed up to `now` since the last poll.
    ///
    /// The schedule moves past `now`, so each elapsed interval is
    /// reported once.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let behind = (now - due).as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(behind + 1).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.interval * ticks);
        ticks
    }

    /// Report whether a tick is due at `now`.
    ///
    /// Ticks missed by more than one interval are dropped rather than
    /// replayed in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.due_ticks(now) > 0
    }
}
