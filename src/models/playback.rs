// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback scheduling.
//!
//! Playback is a two-state machine (stopped/playing) plus a deadline.
//! It owns no thread: whoever runs the event loop polls it with the
//! current time and receives a [`TickToken`] when a frame advance is due.
//!
//! Every transition that invalidates a pending tick (start, stop, a
//! change in frame count, or a manual cursor move) bumps the generation
//! counter. Tokens from an older generation are refused, so a tick
//! computed before such a change can never move the cursor afterwards.

use std::time::{Duration, Instant};

/// Reference interval between frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Permission to advance the cursor once, valid for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct Playback {
    state: PlaybackState,
    interval: Duration,
    generation: u64,
    /// `None` while playing means "arm on next poll".
    deadline: Option<Instant>,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: PlaybackState::Stopped,
            interval,
            generation: 0,
            deadline: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Flip between stopped and playing. Returns the new state.
    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Stopped => self.start(),
            PlaybackState::Playing => self.stop(),
        }
        self.state
    }

    pub fn start(&mut self) {
        self.state = PlaybackState::Playing;
        self.invalidate();
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.invalidate();
    }

    /// Drop any pending tick. If playing, the next poll starts a fresh
    /// interval.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = None;
    }

    /// Check whether a tick is due at `now`.
    ///
    /// The first poll after starting (or after invalidation) only arms the
    /// deadline. Late polls issue a single tick and re-arm from `now`
    /// rather than replaying every missed interval.
    pub fn poll(&mut self, now: Instant) -> Option<TickToken> {
        if !self.is_playing() {
            return None;
        }
        match self.deadline {
            None => {
                self.deadline = Some(now + self.interval);
                None
            }
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                Some(TickToken {
                    generation: self.generation,
                })
            }
            Some(_) => None,
        }
    }

    /// Whether a token may still be applied.
    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_playing() && token.generation == self.generation
    }

    /// Time left until the next tick, for scheduling a wake-up.
    /// `None` when stopped; zero when not yet armed or overdue.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.is_playing() {
            return None;
        }
        Some(
            self.deadline
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(Duration::ZERO),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_toggle_flips_state() {
        let mut playback = Playback::default();
        assert_eq!(playback.state(), PlaybackState::Stopped);
        assert_eq!(playback.toggle(), PlaybackState::Playing);
        assert_eq!(playback.toggle(), PlaybackState::Stopped);
    }

    #[test]
    fn test_poll_ticks_once_per_interval() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        playback.start();

        assert!(playback.poll(t0).is_none(), "first poll only arms");
        assert!(playback.poll(t0 + 50 * MS).is_none());
        assert!(playback.poll(t0 + 100 * MS).is_some());
        assert!(playback.poll(t0 + 150 * MS).is_none());
        assert!(playback.poll(t0 + 200 * MS).is_some());
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        playback.start();
        playback.poll(t0);

        assert!(playback.poll(t0 + 1000 * MS).is_some());
        assert!(playback.poll(t0 + 1000 * MS).is_none());
    }

    #[test]
    fn test_stopped_never_ticks() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        assert!(playback.poll(t0).is_none());
        assert!(playback.poll(t0 + 500 * MS).is_none());
        assert_eq!(playback.time_until_next(t0), None);
    }

    #[test]
    fn test_stale_token_is_refused() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        playback.start();
        playback.poll(t0);
        let token = playback.poll(t0 + 100 * MS).unwrap();
        assert!(playback.accepts(token));

        playback.invalidate();
        assert!(!playback.accepts(token));

        playback.stop();
        playback.start();
        assert!(!playback.accepts(token));
    }

    #[test]
    fn test_invalidate_restarts_interval() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        playback.start();
        playback.poll(t0);

        playback.invalidate();
        assert!(playback.poll(t0 + 100 * MS).is_none(), "re-armed, not fired");
        assert!(playback.poll(t0 + 150 * MS).is_none());
        assert!(playback.poll(t0 + 200 * MS).is_some());
    }

    #[test]
    fn test_time_until_next() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        playback.start();
        assert_eq!(playback.time_until_next(t0), Some(Duration::ZERO));
        playback.poll(t0);
        assert_eq!(playback.time_until_next(t0 + 40 * MS), Some(60 * MS));
        assert_eq!(playback.time_until_next(t0 + 400 * MS), Some(Duration::ZERO));
    }
}
