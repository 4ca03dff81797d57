// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timer.
//!
//! The timer is polled from the host's tick rather than scheduling its own
//! wakeups, so it stays deterministic under test.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Whether the timer re-arms itself after firing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    /// Fires every interval until cancelled; each firing slides the banner
    /// above the screen without tearing it down.
    #[default]
    Repeating,
    /// Fires once and dismisses the banner.
    SingleShot,
}

/// Cancellable deadline for the auto-dismiss behavior.
#[derive(Debug, Clone)]
pub struct DismissTimer {
    mode: TimerMode,
    delay: Duration,
    deadline: Option<Instant>,
}

impl DismissTimer {
    #[must_use]
    pub fn new(delay: Duration, mode: TimerMode) -> Self {
        Self {
            mode,
            delay,
            deadline: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn set_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
    }

    /// Starts (or restarts) the countdown from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Stops the countdown. Cancelling a disarmed timer is a no-op.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the next firing.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` when the deadline has passed, re-arming or disarming
    /// according to the mode.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = match self.mode {
                    TimerMode::Repeating => Some(deadline + self.delay),
                    TimerMode::SingleShot => None,
                };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(3);

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = DismissTimer::new(DELAY, TimerMode::Repeating);
        assert!(!timer.poll(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_deadline_passes() {
        let start = Instant::now();
        let mut timer = DismissTimer::new(DELAY, TimerMode::SingleShot);
        timer.arm(start);

        assert!(!timer.poll(start + Duration::from_secs(2)));
        assert!(timer.poll(start + DELAY));
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn repeating_timer_refires_every_interval() {
        let start = Instant::now();
        let mut timer = DismissTimer::new(DELAY, TimerMode::Repeating);
        timer.arm(start);

        assert!(timer.poll(start + DELAY));
        assert!(timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(timer.poll(start + Duration::from_secs(6)));
        assert!(timer.poll(start + Duration::from_secs(9)));
    }

    #[test]
    fn cancel_disarms() {
        let start = Instant::now();
        let mut timer = DismissTimer::new(DELAY, TimerMode::Repeating);
        timer.arm(start);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(timer.remaining(start).is_none());
        assert!(!timer.poll(start + DELAY));
    }

    #[test]
    fn rearming_restarts_the_countdown() {
        let start = Instant::now();
        let mut timer = DismissTimer::new(DELAY, TimerMode::SingleShot);
        timer.arm(start);
        timer.arm(start + Duration::from_secs(2));
        assert!(!timer.poll(start + DELAY));
        assert_eq!(
            timer.remaining(start + DELAY),
            Some(Duration::from_secs(2))
        );
    }
}
