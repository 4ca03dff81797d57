// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine.
//!
//! [`Presentation`] owns the model geometry of one banner and reacts to
//! events by updating that geometry and returning the [`Effect`]s the caller
//! must carry out (attach layers, start transitions, arm the timer, run
//! callbacks). It performs no I/O and never reads a clock, so every
//! transition can be exercised directly in tests.
//!
//! ```text
//! Hidden -> Presenting -> Resting -> (Expanded) -> Dismissing -> Removed
//! ```

use super::animation::Completion;
use super::geometry::{self, center, with_center_y};
use super::host::Layer;
use super::layout::Layout;
use super::timer::TimerMode;
use crate::config::{
    BANNER_HEIGHT, CONTENT_HEIGHT, EXPAND_DURATION_SECS, FAST_SWIPE_SECS, GRABBER_BOTTOM_OFFSET,
    GRABBER_WIDTH, PRESENT_DURATION_SECS, PULL_DAMPING, QUICK_DISMISS_DURATION_SECS,
    SNAP_BACK_DURATION_SECS, TIMER_SLIDE_DURATION_SECS,
};
use iced::{Point, Size};
use std::time::Duration;

/// Lifecycle phase of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but not yet presented.
    Hidden,
    /// Sliding in.
    Presenting,
    /// On screen, collapsed.
    Resting,
    /// Expanded; only a dismissal leaves this phase.
    Expanded,
    /// Sliding out.
    Dismissing,
    /// Detached from the host. Terminal.
    Removed,
}

impl Phase {
    /// Whether pan gestures are interpreted in this phase.
    #[must_use]
    pub fn accepts_gestures(self) -> bool {
        matches!(self, Phase::Resting | Phase::Expanded)
    }

    /// Whether the banner is attached and not already leaving.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Phase::Presenting | Phase::Resting | Phase::Expanded)
    }
}

/// Stage of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
}

/// One pan sample: movement since the previous sample and current velocity,
/// both vertical, in points and points per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub translation_y: f32,
    pub velocity_y: f32,
}

impl PanEvent {
    #[must_use]
    pub fn began(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            phase: PanPhase::Began,
            translation_y,
            velocity_y,
        }
    }

    #[must_use]
    pub fn changed(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation_y,
            velocity_y,
        }
    }

    #[must_use]
    pub fn ended(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation_y,
            velocity_y,
        }
    }
}

/// Where a tap landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    Banner,
    Overlay,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Show the banner. `message_height` is the measured height of the full
    /// message wrapped to the label width.
    Present {
        message_height: f32,
        reduce_transparency: bool,
    },
    AnimationFinished(Completion),
    TimerFired,
    Pan(PanEvent),
    Tap(TapTarget),
    ActionSelected,
}

/// Work the caller performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Attach(Layer),
    Detach(Layer),
    /// Animate from what is currently drawn to the new model layout.
    Animate {
        duration: Duration,
        completion: Completion,
    },
    ArmTimer,
    CancelTimer,
    InvokeTap,
    InvokeDismiss,
    Haptic,
}

/// Non-geometric presentation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// Screen overlay is part of the drawn hierarchy.
    pub overlay_visible: bool,
    /// Background is a flat fill rather than a translucent blur surface.
    pub flat_background: bool,
    /// Bottom border under the background is drawn.
    pub border_visible: bool,
    /// Message label wraps onto multiple lines.
    pub message_wraps: bool,
    /// Banner casts a shadow.
    pub shadow: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            flat_background: false,
            border_visible: true,
            message_wraps: false,
            shadow: true,
        }
    }
}

/// Vertical origins of the action strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripOrigins {
    pub resting: f32,
    pub expanded: f32,
    pub dismissed: f32,
}

/// Swipe time: how long the banner would take to travel its own height at
/// the release velocity. Zero or non-finite velocity yields infinity.
#[must_use]
pub fn swipe_time(height: f32, velocity_y: f32) -> f64 {
    let speed = f64::from(velocity_y.abs());
    if speed == 0.0 || !speed.is_finite() {
        return f64::INFINITY;
    }
    f64::from(height) / speed
}

/// Model state of one banner.
#[derive(Debug, Clone)]
pub struct Presentation {
    phase: Phase,
    screen: Size,
    layout: Layout,
    appearance: Appearance,
    origin: Point,
    expanded: bool,
    expandable: bool,
    timer_mode: TimerMode,
    strip: Option<StripOrigins>,
    message_height: f32,
}

impl Presentation {
    #[must_use]
    pub fn new(screen: Size) -> Self {
        Self {
            phase: Phase::Hidden,
            screen,
            layout: Layout::hidden(screen, screen.height),
            appearance: Appearance::default(),
            origin: Point::ORIGIN,
            expanded: false,
            expandable: false,
            timer_mode: TimerMode::default(),
            strip: None,
            message_height: 0.0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Model layout: where everything is, or is animating to.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Resting center recorded after the last settled transition.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn set_expandable(&mut self, expandable: bool) {
        self.expandable = expandable;
    }

    pub fn set_timer_mode(&mut self, mode: TimerMode) {
        self.timer_mode = mode;
    }

    /// Registers the action strip; `None` when there are no actions.
    pub fn set_strip(&mut self, strip: Option<StripOrigins>) {
        self.strip = strip;
        self.layout.strip_origin_y = strip.map_or(self.screen.height, |s| s.resting);
    }

    /// Applies one event.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Present {
                message_height,
                reduce_transparency,
            } => self.present(message_height, reduce_transparency),
            Event::AnimationFinished(completion) => self.animation_finished(completion),
            Event::TimerFired => self.timer_fired(),
            Event::Pan(pan) => self.pan(pan),
            // The overlay only takes input once the banner has expanded.
            Event::Tap(TapTarget::Overlay) if self.appearance.overlay_visible => {
                self.dismiss(secs(QUICK_DISMISS_DURATION_SECS))
            }
            Event::Tap(TapTarget::Overlay) => Vec::new(),
            Event::Tap(TapTarget::Banner) => {
                if self.phase.is_live() {
                    vec![Effect::InvokeTap]
                } else {
                    Vec::new()
                }
            }
            Event::ActionSelected => self.dismiss(secs(QUICK_DISMISS_DURATION_SECS)),
        }
    }

    fn present(&mut self, message_height: f32, reduce_transparency: bool) -> Vec<Effect> {
        if self.phase != Phase::Hidden {
            tracing::debug!(phase = ?self.phase, "present ignored");
            return Vec::new();
        }

        self.message_height = message_height;
        self.appearance.flat_background = reduce_transparency;
        self.phase = Phase::Presenting;

        let mut effects = vec![Effect::Attach(Layer::Overlay), Effect::Attach(Layer::Banner)];
        if self.strip.is_some() {
            effects.push(Effect::Attach(Layer::ActionStrip));
        }

        self.layout.frame.y = 0.0;
        effects.push(Effect::Animate {
            duration: secs(PRESENT_DURATION_SECS),
            completion: Completion::Presented,
        });

        tracing::debug!("banner presenting");
        effects
    }

    fn animation_finished(&mut self, completion: Completion) -> Vec<Effect> {
        match (completion, self.phase) {
            (Completion::Presented, Phase::Presenting) => {
                self.origin = center(self.layout.frame);
                self.phase = Phase::Resting;
                tracing::debug!(origin_y = self.origin.y, "banner resting");
                vec![Effect::ArmTimer]
            }
            (Completion::Expanded, Phase::Expanded) => {
                self.origin = center(self.layout.frame);
                tracing::debug!(origin_y = self.origin.y, "banner expanded");
                Vec::new()
            }
            (Completion::Dismissed, Phase::Dismissing) => {
                self.phase = Phase::Removed;
                tracing::debug!("banner removed");

                let mut effects = vec![
                    Effect::InvokeDismiss,
                    Effect::Detach(Layer::Banner),
                    Effect::Detach(Layer::Overlay),
                ];
                if self.strip.is_some() {
                    effects.push(Effect::Detach(Layer::ActionStrip));
                }
                effects
            }
            _ => Vec::new(),
        }
    }

    fn timer_fired(&mut self) -> Vec<Effect> {
        if !self.phase.accepts_gestures() {
            return Vec::new();
        }

        match self.timer_mode {
            TimerMode::Repeating => {
                tracing::debug!("dismiss timer fired, sliding above screen");
                self.layout.frame =
                    geometry::frame(0.0, -BANNER_HEIGHT, self.screen.width, BANNER_HEIGHT);
                vec![Effect::Animate {
                    duration: secs(TIMER_SLIDE_DURATION_SECS),
                    completion: Completion::None,
                }]
            }
            TimerMode::SingleShot => self.dismiss(secs(TIMER_SLIDE_DURATION_SECS)),
        }
    }

    fn pan(&mut self, pan: PanEvent) -> Vec<Effect> {
        if !self.phase.accepts_gestures() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        let time = swipe_time(self.layout.frame.height, pan.velocity_y);
        let current = center(self.layout.frame);

        if current.y > self.origin.y {
            // Below the resting line the banner resists, more the further it goes.
            let movement = self.origin.y + current.y;
            let divisor = movement * PULL_DAMPING;
            let step = if divisor > 0.0 {
                pan.translation_y / divisor
            } else {
                pan.translation_y
            };
            self.layout.frame = with_center_y(self.layout.frame, current.y + step);

            if time <= FAST_SWIPE_SECS {
                effects.push(Effect::CancelTimer);
            }
        } else {
            self.layout.frame = with_center_y(self.layout.frame, current.y + pan.translation_y);
        }

        tracing::trace!(
            phase = ?pan.phase,
            center_y = center(self.layout.frame).y,
            origin_y = self.origin.y,
            time,
            "pan"
        );

        match pan.phase {
            PanPhase::Began => effects.push(Effect::CancelTimer),
            PanPhase::Changed => {}
            PanPhase::Ended => effects.extend(self.pan_ended(time)),
        }

        effects
    }

    fn pan_ended(&mut self, time: f64) -> Vec<Effect> {
        let below_rest = center(self.layout.frame).y > self.origin.y;

        if below_rest && time > FAST_SWIPE_SECS && !self.expanded {
            let mut effects = self.snap_back();
            effects.push(Effect::ArmTimer);
            effects
        } else if !below_rest {
            let duration = if time <= FAST_SWIPE_SECS {
                time
            } else {
                QUICK_DISMISS_DURATION_SECS
            };
            self.dismiss(secs(duration))
        } else if !self.expanded && self.expandable {
            let effects = self.expand();
            self.expanded = true;
            effects
        } else {
            let mut effects = self.snap_back();
            if !self.expandable {
                effects.push(Effect::ArmTimer);
            }
            effects
        }
    }

    fn snap_back(&mut self) -> Vec<Effect> {
        self.layout.frame.x = 0.0;
        self.layout.frame.y = 0.0;
        vec![Effect::Animate {
            duration: secs(SNAP_BACK_DURATION_SECS),
            completion: Completion::None,
        }]
    }

    fn expand(&mut self) -> Vec<Effect> {
        if self.expanded {
            return Vec::new();
        }

        let extra = self.message_height - 5.0;
        let width = self.layout.frame.width;

        self.appearance.message_wraps = true;
        self.appearance.overlay_visible = true;
        self.appearance.border_visible = false;
        self.appearance.flat_background = true;
        self.appearance.shadow = false;

        self.layout.frame = geometry::frame(0.0, 0.0, width, CONTENT_HEIGHT + extra);
        self.layout.message_height = extra + 5.0;
        self.layout.content_height += extra - 20.0;
        self.layout.grabber = Point::new(
            width / 2.0 - GRABBER_WIDTH / 2.0,
            self.layout.content_height - GRABBER_BOTTOM_OFFSET,
        );
        if let Some(strip) = self.strip {
            self.layout.strip_origin_y = strip.expanded;
        }
        self.layout.background = geometry::frame(
            0.0,
            -self.screen.height + extra - 20.0,
            width,
            self.screen.height + BANNER_HEIGHT,
        );
        self.layout.overlay_alpha = 1.0;
        self.phase = Phase::Expanded;

        tracing::debug!(height = self.layout.frame.height, "banner expanding");
        vec![
            Effect::Haptic,
            Effect::Animate {
                duration: secs(EXPAND_DURATION_SECS),
                completion: Completion::Expanded,
            },
        ]
    }

    fn dismiss(&mut self, duration: Duration) -> Vec<Effect> {
        if !self.phase.is_live() {
            tracing::debug!(phase = ?self.phase, "dismiss ignored");
            return Vec::new();
        }

        let height = self.layout.frame.height;
        self.layout.frame = geometry::frame(0.0, -height, self.screen.width, height);
        self.layout.strip_origin_y = self
            .strip
            .map_or(self.screen.height, |strip| strip.dismissed);
        self.layout.overlay_alpha = 0.0;
        self.phase = Phase::Dismissing;

        tracing::debug!(duration_secs = duration.as_secs_f64(), "banner dismissing");
        vec![
            Effect::CancelTimer,
            Effect::Animate {
                duration,
                completion: Completion::Dismissed,
            },
        ]
    }
}

fn secs(value: f64) -> Duration {
    Duration::from_secs_f64(value.max(0.0))
}
