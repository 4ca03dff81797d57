// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-gesture recognition.
//!
//! Turns raw press/move/release samples into either a tap or a vertical pan
//! with per-sample translation and a release velocity, the inputs the banner
//! state machine expects.

use crate::banner::PanEvent;
use crate::config::DRAG_SLOP;
use iced::Point;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples older than this do not contribute to the velocity estimate.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Result of feeding a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer released without moving past the slop.
    Tap(Point),
    /// A pan sample.
    Pan(PanEvent),
}

#[derive(Debug, Clone)]
struct Tracking {
    start: Point,
    last_y: f32,
    panning: bool,
    history: VecDeque<(Instant, f32)>,
}

/// Recognizes taps and vertical pans from one pointer.
#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    tracking: Option<Tracking>,
}

impl PanRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Whether the tracked press has turned into a pan.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.tracking.as_ref().is_some_and(|t| t.panning)
    }

    /// Starts tracking a press.
    pub fn press(&mut self, position: Point, now: Instant) {
        let mut history = VecDeque::new();
        history.push_back((now, position.y));
        self.tracking = Some(Tracking {
            start: position,
            last_y: position.y,
            panning: false,
            history,
        });
    }

    /// Feeds a move. Returns a pan sample once the pointer has left the slop.
    pub fn moved(&mut self, position: Point, now: Instant) -> Option<Gesture> {
        let tracking = self.tracking.as_mut()?;
        record(&mut tracking.history, now, position.y);

        if !tracking.panning {
            let dx = position.x - tracking.start.x;
            let dy = position.y - tracking.start.y;
            if dx.hypot(dy) < DRAG_SLOP {
                return None;
            }
            tracking.panning = true;
            let translation = position.y - tracking.last_y;
            tracking.last_y = position.y;
            let velocity = velocity(&tracking.history);
            return Some(Gesture::Pan(PanEvent::began(translation, velocity)));
        }

        let translation = position.y - tracking.last_y;
        tracking.last_y = position.y;
        Some(Gesture::Pan(PanEvent::changed(
            translation,
            velocity(&tracking.history),
        )))
    }

    /// Ends the press.
    pub fn release(&mut self, position: Point, now: Instant) -> Option<Gesture> {
        let mut tracking = self.tracking.take()?;
        if !tracking.panning {
            return Some(Gesture::Tap(position));
        }

        record(&mut tracking.history, now, position.y);
        let translation = position.y - tracking.last_y;
        Some(Gesture::Pan(PanEvent::ended(
            translation,
            velocity(&tracking.history),
        )))
    }

    /// Drops the tracked press, e.g. when the pointer leaves the window.
    ///
    /// A pan in progress ends where it is, without velocity.
    pub fn cancel(&mut self) -> Option<Gesture> {
        let tracking = self.tracking.take()?;
        tracking
            .panning
            .then(|| Gesture::Pan(PanEvent::ended(0.0, 0.0)))
    }
}

fn record(history: &mut VecDeque<(Instant, f32)>, now: Instant, y: f32) {
    history.push_back((now, y));
    while history.len() > 2 {
        match history.front() {
            Some((at, _)) if now.saturating_duration_since(*at) > VELOCITY_WINDOW => {
                history.pop_front();
            }
            _ => break,
        }
    }
}

/// Points per second over the retained window.
fn velocity(history: &VecDeque<(Instant, f32)>) -> f32 {
    let (Some(&(first_at, first_y)), Some(&(last_at, last_y))) = (history.front(), history.back())
    else {
        return 0.0;
    };
    let elapsed = last_at.saturating_duration_since(first_at).as_secs_f32();
    if elapsed <= f32::EPSILON {
        return 0.0;
    }
    (last_y - first_y) / elapsed
}
