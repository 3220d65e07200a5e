use std::time::{Duration, Instant};

pub const PLACEHOLDER_HINTS: [&str; 5] = [
    "Search for irregular verbs...",
    "Try \"go\", \"went\", \"gone\"...",
    "Search by translation...",
    "Find \"быть\", \"иметь\", \"делать\"...",
    "Type any verb form...",
];

pub const ROTATION_PERIOD: Duration = Duration::from_secs(3);

/// Cycles the search input placeholder while the input is idle.
#[derive(Debug, Clone)]
pub struct PlaceholderRotation {
    index: usize,
    next_at: Instant,
    period: Duration,
}

impl PlaceholderRotation {
    pub fn new(now: Instant) -> Self {
        Self {
            index: 0,
            next_at: now + ROTATION_PERIOD,
            period: ROTATION_PERIOD,
        }
    }

    #[must_use]
    pub fn current(&self) -> &'static str {
        PLACEHOLDER_HINTS[self.index]
    }

    /// Advance to the next hint once the period has elapsed. The rotation only
    /// moves while `active` (input empty and unfocused). Returns the new hint
    /// when it changed.
    pub fn tick(&mut self, now: Instant, active: bool) -> Option<&'static str> {
        if now < self.next_at {
            return None;
        }
        self.next_at = now + self.period;
        if !active {
            return None;
        }
        self.index = (self.index + 1) % PLACEHOLDER_HINTS.len();
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_every_period_while_active() {
        let start = Instant::now();
        let mut rotation = PlaceholderRotation::new(start);
        assert_eq!(rotation.current(), PLACEHOLDER_HINTS[0]);
        assert_eq!(rotation.tick(start + Duration::from_secs(1), true), None);
        assert_eq!(
            rotation.tick(start + ROTATION_PERIOD, true),
            Some(PLACEHOLDER_HINTS[1])
        );
    }

    #[test]
    fn holds_while_inactive() {
        let start = Instant::now();
        let mut rotation = PlaceholderRotation::new(start);
        assert_eq!(rotation.tick(start + ROTATION_PERIOD, false), None);
        assert_eq!(rotation.current(), PLACEHOLDER_HINTS[0]);
    }

    #[test]
    fn wraps_around() {
        let start = Instant::now();
        let mut rotation = PlaceholderRotation::new(start);
        for step in 1..=PLACEHOLDER_HINTS.len() as u32 {
            rotation.tick(start + ROTATION_PERIOD * step, true);
        }
        assert_eq!(rotation.current(), PLACEHOLDER_HINTS[0]);
    }
}
