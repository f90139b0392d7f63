//! One-shot click suppression after a drag release.
//!
//! Releasing a dragged card makes the browser synthesize a click on it. The
//! guard swallows exactly that click, and expires on its own so a click much
//! later is never eaten by a stale guard.

use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct ClickGuard {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl ClickGuard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    /// Arms the guard; re-arming pushes the deadline out again.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.timeout);
    }

    /// Returns `true` if this click must be swallowed.
    ///
    /// The guard disarms itself on the first click it sees, whether or not
    /// that click arrived before the deadline.
    pub fn intercept(&mut self, now: Instant) -> bool {
        match self.deadline.take() {
            Some(deadline) => now <= deadline,
            None => false,
        }
    }

    /// Drops the guard once its deadline has passed.
    ///
    /// Returns `true` if it was removed by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now <= deadline)
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
