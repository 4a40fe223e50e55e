//! One-shot tick timer that is re-armed after each firing.
//!
//! Each deadline is measured from the moment the previous tick fired, so a late
//! tick pushes the next one back instead of being caught up.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    /// `None` while disarmed.
    deadline: Option<Instant>,
}

impl TickTimer {
    /// Create a timer armed to fire one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: Some(now + interval),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// True once the deadline has passed. A disarmed timer is never due.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fire if due: returns true and re-arms from `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.rearm(now);
        true
    }

    /// Time left until the deadline, or `None` while disarmed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
