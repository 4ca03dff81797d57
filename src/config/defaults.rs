// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the banner's
//! geometry and timing. Constants are organized by category.
//!
//! # Categories
//!
//! - **Banner**: Collapsed frame and content layout
//! - **Actions**: Action strip row metrics
//! - **Timing**: Animation durations and the auto-dismiss delay
//! - **Gestures**: Swipe thresholds and pan damping

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Height of the collapsed banner.
pub const BANNER_HEIGHT: f32 = 95.0;

/// Vertical offset of the content view inside the banner (status bar area).
pub const CONTENT_TOP: f32 = 20.0;

/// Height of the collapsed content view.
pub const CONTENT_HEIGHT: f32 = 75.0;

/// Side length of the circular image.
pub const IMAGE_SIZE: f32 = 50.0;

/// Left inset of the image inside the content view.
pub const IMAGE_INSET_X: f32 = 15.0;

/// Top inset of the image inside the content view.
pub const IMAGE_INSET_Y: f32 = 5.0;

/// Left edge of the title and message labels.
pub const LABEL_X: f32 = 75.0;

/// Horizontal space taken by the image column and the right margin.
pub const LABEL_HORIZONTAL_INSET: f32 = 90.0;

/// Top of the title label inside the content view.
pub const TITLE_Y: f32 = 10.0;

/// Top of the message label inside the content view.
pub const MESSAGE_Y: f32 = 30.0;

/// Single-line label height.
pub const LABEL_HEIGHT: f32 = 20.0;

/// Title font size.
pub const TITLE_FONT_SIZE: f32 = 16.0;

/// Message font size.
pub const MESSAGE_FONT_SIZE: f32 = 14.0;

/// Grabber handle size.
pub const GRABBER_WIDTH: f32 = 40.0;
pub const GRABBER_HEIGHT: f32 = 5.0;

/// Distance between the grabber and the bottom of the content view.
pub const GRABBER_BOTTOM_OFFSET: f32 = 10.0;

/// Thickness of the bottom border on the blurred background.
pub const BORDER_THICKNESS: f32 = 0.6;

/// Opacity of the black screen-dimming overlay.
pub const OVERLAY_DIM_ALPHA: f32 = 0.3;

// ==========================================================================
// Action Defaults
// ==========================================================================

/// Height of a single action button.
pub const ACTION_HEIGHT: f32 = 50.0;

/// Separator gap between consecutive action buttons.
pub const ACTION_SEPARATOR: f32 = 0.5;

/// Action title font size.
pub const ACTION_FONT_SIZE: f32 = 16.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time the banner rests on screen before the timer fires (seconds).
pub const DEFAULT_DISMISS_DELAY_SECS: f64 = 3.0;

/// Minimum configurable dismiss delay (seconds).
pub const MIN_DISMISS_DELAY_SECS: f64 = 0.5;

/// Maximum configurable dismiss delay (seconds).
pub const MAX_DISMISS_DELAY_SECS: f64 = 60.0;

/// Slide-in duration used by `present`.
pub const PRESENT_DURATION_SECS: f64 = 0.5;

/// Slide-out duration used when the dismiss timer fires.
pub const TIMER_SLIDE_DURATION_SECS: f64 = 0.5;

/// Snap-back duration after a released drag.
pub const SNAP_BACK_DURATION_SECS: f64 = 0.2;

/// Expansion duration.
pub const EXPAND_DURATION_SECS: f64 = 0.2;

/// Dismiss duration for taps, action selection and slow upward swipes.
pub const QUICK_DISMISS_DURATION_SECS: f64 = 0.3;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Swipe time (seconds) at or below which a swipe counts as fast.
pub const FAST_SWIPE_SECS: f64 = 1.0;

/// Damping coefficient applied to downward drags below the resting line.
pub const PULL_DAMPING: f32 = 0.1;

/// Pointer travel (logical pixels) before a press turns into a pan.
pub const DRAG_SLOP: f32 = 8.0;
