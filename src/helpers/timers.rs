//! Fire-once timer queue on a virtual monotonic clock
//!
//! Timers are keyed by a [`TimerId`] and carry an arbitrary payload. The
//! queue never fires on its own: the owner advances the clock and receives
//! every payload whose deadline has passed, oldest deadline first. Timers
//! cannot be cancelled once scheduled.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifier of a scheduled timer, unique within one queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A fire-once timer queue
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), T>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: BTreeMap::new(),
        }
    }

    /// Current clock reading
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` from now
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now + delay, id), payload);
        id
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Work scheduled by the caller before the next pop counts
    /// from that deadline, so chained timers keep their spacing.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let entry = self.pending.first_entry()?;
        let (deadline, id) = *entry.key();
        if deadline > until.max(self.now) {
            return None;
        }
        self.now = self.now.max(deadline);
        Some((id, entry.remove()))
    }

    /// Move the clock to `now` (never backwards) and return every due payload
    pub fn advance_to(&mut self, now: Duration) -> Vec<(TimerId, T)> {
        let mut due = Vec::new();
        while let Some(timer) = self.pop_due(now) {
            due.push(timer);
        }
        self.now = self.now.max(now);
        due
    }

    /// Time remaining until the earliest pending deadline
    pub fn next_delay(&self) -> Option<Duration> {
        self.pending
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(self.now))
    }

    /// Number of timers that have not fired yet
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending payloads in firing order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pending.values()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_only_after_deadline() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(800), "enter");

        assert!(timers.advance_to(ms(799)).is_empty());
        let fired = timers.advance_to(ms(800));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, "enter");
        assert!(timers.is_empty());
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(1000), "banner");
        timers.schedule(ms(100), "scroll");
        timers.schedule(ms(100), "scroll-again");

        let fired: Vec<_> = timers.advance_to(ms(5000)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec!["scroll", "scroll-again", "banner"]);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut timers = TimerQueue::new();
        timers.advance_to(ms(500));
        timers.advance_to(ms(200));
        assert_eq!(timers.now(), ms(500));

        timers.schedule(ms(100), ());
        assert_eq!(timers.next_delay(), Some(ms(100)));
    }

    #[test]
    fn chained_timer_counts_from_the_firing_deadline() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(800), "intro");

        let mut fired = Vec::new();
        while let Some((_, payload)) = timers.pop_due(ms(1800)) {
            assert_eq!(timers.now(), if payload == "intro" { ms(800) } else { ms(1800) });
            if payload == "intro" {
                timers.schedule(ms(1000), "banner");
            }
            fired.push(payload);
        }

        assert_eq!(fired, vec!["intro", "banner"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn pop_due_leaves_future_timers() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(300), ());

        assert!(timers.pop_due(ms(299)).is_none());
        assert_eq!(timers.now(), Duration::ZERO);
        assert_eq!(timers.len(), 1);
    }
}
