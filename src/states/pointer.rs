//! Pointer Follower
//!
//! Two tracked positions: the pointer itself, and a follower that replays
//! each pointer position a fixed delay later, leaving a short trail.

use std::time::Duration;

use crate::constants::POINTER_FOLLOW_DELAY_MS;
use crate::helpers::TimerQueue;

/// Position in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Cosmetic cursor tracker
#[derive(Debug, Clone)]
pub struct PointerFollower {
    pointer: PointerPosition,
    follower: PointerPosition,
    lag: Duration,
    trail: TimerQueue<PointerPosition>,
}

impl PointerFollower {
    pub fn new() -> Self {
        Self::with_lag(Duration::from_millis(POINTER_FOLLOW_DELAY_MS))
    }

    pub fn with_lag(lag: Duration) -> Self {
        Self {
            pointer: PointerPosition::default(),
            follower: PointerPosition::default(),
            lag,
            trail: TimerQueue::new(),
        }
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    pub fn follower(&self) -> PointerPosition {
        self.follower
    }

    /// Whether follower updates are still queued
    pub fn is_trailing(&self) -> bool {
        !self.trail.is_empty()
    }

    /// Record a pointer move observed at `now`
    pub fn on_move(&mut self, position: PointerPosition, now: Duration) {
        self.tick(now);
        self.pointer = position;
        self.trail.schedule(self.lag, position);
    }

    /// Bring the follower up to date with `now`
    pub fn tick(&mut self, now: Duration) {
        if let Some((_, position)) = self.trail.advance_to(now).pop() {
            self.follower = position;
        }
    }
}

impl Default for PointerFollower {
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
    fn follower_lags_pointer() {
        let mut cursor = PointerFollower::new();
        cursor.on_move(PointerPosition::new(10.0, 20.0), ms(0));
        assert_eq!(cursor.pointer(), PointerPosition::new(10.0, 20.0));
        assert_eq!(cursor.follower(), PointerPosition::default());

        cursor.tick(ms(99));
        assert_eq!(cursor.follower(), PointerPosition::default());

        cursor.tick(ms(100));
        assert_eq!(cursor.follower(), PointerPosition::new(10.0, 20.0));
        assert!(!cursor.is_trailing());
    }

    #[test]
    fn follower_replays_latest_due_position() {
        let mut cursor = PointerFollower::new();
        cursor.on_move(PointerPosition::new(1.0, 1.0), ms(0));
        cursor.on_move(PointerPosition::new(2.0, 2.0), ms(30));
        cursor.on_move(PointerPosition::new(3.0, 3.0), ms(60));

        cursor.tick(ms(140));
        assert_eq!(cursor.follower(), PointerPosition::new(2.0, 2.0));
        assert!(cursor.is_trailing());

        cursor.tick(ms(500));
        assert_eq!(cursor.follower(), PointerPosition::new(3.0, 3.0));
    }
}
