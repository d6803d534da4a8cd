//! Trailing-edge coalescing for selection-change bursts
//!
//! Poll-driven so callers own the clock: the host ticks it from its event
//! loop, tests pass synthetic instants. No timers, no threads.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)arm the trailing edge relative to `now`. Each call pushes the
    /// deadline out, so only the last event of a burst fires.
    pub fn bump(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True exactly once per armed burst, once the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next instant at which [`Debouncer::poll`] will fire, for hosts that
    /// schedule wakeups instead of ticking.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    #[test]
    fn test_fires_once_after_the_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.bump(start);
        assert!(!debouncer.poll(start));
        assert!(!debouncer.poll(start + Duration::from_millis(249)));
        assert!(debouncer.poll(start + DELAY));
        assert!(!debouncer.poll(start + DELAY));
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn test_burst_coalesces_to_the_last_event() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.bump(start);
        debouncer.bump(start + Duration::from_millis(100));
        debouncer.bump(start + Duration::from_millis(200));

        assert!(!debouncer.poll(start + Duration::from_millis(449)));
        assert!(debouncer.poll(start + Duration::from_millis(450)));
    }

    #[test]
    fn test_cancel_disarms() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.bump(start);
        debouncer.cancel();
        assert!(!debouncer.poll(start + DELAY));
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.poll(Instant::now()));
    }

    #[test]
    fn test_zero_delay_fires_on_the_next_poll() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        let now = Instant::now();

        debouncer.bump(now);
        assert!(debouncer.poll(now));
    }

    #[test]
    fn test_deadline_is_exposed_for_scheduling() {
        let mut debouncer = Debouncer::new(DELAY);
        let now = Instant::now();
        assert_eq!(debouncer.deadline(), None);

        debouncer.bump(now);
        assert_eq!(debouncer.deadline(), Some(now + DELAY));
    }
}
