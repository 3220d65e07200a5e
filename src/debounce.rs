//! Deadline-based debouncing polled from the event loop tick.

use std::time::{Duration, Instant};

/// Holds at most one pending payload that becomes ready once `delay` has
/// elapsed since it was scheduled. Scheduling again replaces the payload and
/// restarts the wait.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, payload: T, now: Instant) {
        self.schedule_after(payload, now, self.delay);
    }

    /// Schedule with a one-off delay instead of the configured one.
    pub fn schedule_after(&mut self, payload: T, now: Instant, delay: Duration) {
        self.pending = Some((now + delay, payload));
    }

    /// Take the payload if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => {
                self.pending.take().map(|(_, payload)| payload)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}
