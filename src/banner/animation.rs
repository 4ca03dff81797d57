// SPDX-License-Identifier: MPL-2.0
//! Time-driven transitions between layouts.
//!
//! The state machine moves the model layout to its target immediately and
//! asks for a transition; the [`Animator`] only affects what is drawn and
//! reports each transition's completion once its duration has elapsed.
//! A newer transition starts from whatever is on screen at that moment.

use super::layout::Layout;
use std::time::{Duration, Instant};

/// What to tell the state machine when a transition finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Nothing depends on this transition settling.
    None,
    /// Slide-in from `present` finished.
    Presented,
    /// Expansion finished.
    Expanded,
    /// Slide-out from `dismiss` finished.
    Dismissed,
}

#[derive(Debug, Clone)]
struct Transition {
    from: Layout,
    started: Instant,
    duration: Duration,
    completion: Completion,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Ease-in-out curve.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// In-flight transitions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    transitions: Vec<Transition>,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition from the currently drawn layout.
    pub fn start(
        &mut self,
        now: Instant,
        from: Layout,
        duration: Duration,
        completion: Completion,
    ) {
        self.transitions.push(Transition {
            from,
            started: now,
            duration,
            completion,
        });
    }

    /// Layout to draw at `now` given the model layout.
    #[must_use]
    pub fn sample(&self, now: Instant, model: &Layout) -> Layout {
        match self.transitions.last() {
            Some(latest) if !latest.is_finished(now) => {
                Layout::lerp(&latest.from, model, ease_in_out(latest.progress(now)))
            }
            _ => *model,
        }
    }

    /// Removes finished transitions and returns their completions in the
    /// order they were started.
    pub fn poll(&mut self, now: Instant) -> Vec<Completion> {
        let mut finished = Vec::new();
        self.transitions.retain(|transition| {
            if transition.is_finished(now) {
                finished.push(transition.completion);
                false
            } else {
                true
            }
        });
        finished
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Drops every transition without reporting completions.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn layouts() -> (Layout, Layout) {
        let from = Layout::hidden(Size::new(390.0, 844.0), 844.0);
        let mut to = from;
        to.frame.y = 0.0;
        (from, to)
    }

    #[test]
    fn ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn sample_interpolates_toward_model() {
        let (from, to) = layouts();
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.start(start, from, Duration::from_millis(500), Completion::Presented);

        assert_eq!(animator.sample(start, &to).frame.y, -95.0);
        assert_eq!(
            animator.sample(start + Duration::from_millis(250), &to).frame.y,
            -47.5
        );
        assert_eq!(animator.sample(start + Duration::from_secs(1), &to), to);
    }

    #[test]
    fn poll_reports_completions_once() {
        let (from, _) = layouts();
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.start(start, from, Duration::from_millis(500), Completion::Presented);
        animator.start(start, from, Duration::from_millis(200), Completion::None);

        assert!(animator.poll(start + Duration::from_millis(100)).is_empty());
        assert_eq!(
            animator.poll(start + Duration::from_millis(300)),
            vec![Completion::None]
        );
        assert_eq!(
            animator.poll(start + Duration::from_millis(600)),
            vec![Completion::Presented]
        );
        assert!(animator.poll(start + Duration::from_secs(5)).is_empty());
        assert!(!animator.is_animating());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let (from, to) = layouts();
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.start(start, from, Duration::ZERO, Completion::Dismissed);

        assert_eq!(animator.sample(start, &to), to);
        assert_eq!(animator.poll(start), vec![Completion::Dismissed]);
    }
}
