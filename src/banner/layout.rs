// SPDX-License-Identifier: MPL-2.0
//! Animatable geometry of a banner and its companions.
//!
//! Everything the renderer needs to place the banner, its content, the
//! action strip and the screen overlay lives in one [`Layout`] so that a
//! single transition can interpolate all of it.

use super::geometry::{self, lerp, lerp_frame};
use crate::config::{
    BANNER_HEIGHT, CONTENT_HEIGHT, CONTENT_TOP, GRABBER_BOTTOM_OFFSET, GRABBER_WIDTH,
    LABEL_HEIGHT,
};
use iced::{Point, Rectangle, Size};

/// Geometry snapshot, in screen coordinates unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Banner frame.
    pub frame: Rectangle,
    /// Content view height (relative to the banner, top at [`CONTENT_TOP`]).
    pub content_height: f32,
    /// Message label height.
    pub message_height: f32,
    /// Grabber origin, relative to the content view.
    pub grabber: Point,
    /// Action strip origin.
    pub strip_origin_y: f32,
    /// Background layer, relative to the banner. Taller than the banner so a
    /// downward drag looks like the banner stretching.
    pub background: Rectangle,
    /// Screen overlay opacity multiplier.
    pub overlay_alpha: f32,
}

impl Layout {
    /// Collapsed layout parked above the top edge of `screen`.
    #[must_use]
    pub fn hidden(screen: Size, strip_origin_y: f32) -> Self {
        Self {
            frame: geometry::frame(0.0, -BANNER_HEIGHT, screen.width, BANNER_HEIGHT),
            content_height: CONTENT_HEIGHT,
            message_height: LABEL_HEIGHT,
            grabber: Point::new(
                screen.width / 2.0 - GRABBER_WIDTH / 2.0,
                CONTENT_HEIGHT - GRABBER_BOTTOM_OFFSET,
            ),
            strip_origin_y,
            background: geometry::frame(
                0.0,
                -screen.height,
                screen.width,
                screen.height + BANNER_HEIGHT,
            ),
            overlay_alpha: 0.0,
        }
    }

    /// Content view frame in screen coordinates.
    #[must_use]
    pub fn content_frame(&self) -> Rectangle {
        geometry::frame(
            self.frame.x,
            self.frame.y + CONTENT_TOP,
            self.frame.width,
            self.content_height,
        )
    }

    /// Interpolates every field.
    #[must_use]
    pub fn lerp(from: &Layout, to: &Layout, t: f32) -> Layout {
        Layout {
            frame: lerp_frame(from.frame, to.frame, t),
            content_height: lerp(from.content_height, to.content_height, t),
            message_height: lerp(from.message_height, to.message_height, t),
            grabber: Point::new(
                lerp(from.grabber.x, to.grabber.x, t),
                lerp(from.grabber.y, to.grabber.y, t),
            ),
            strip_origin_y: lerp(from.strip_origin_y, to.strip_origin_y, t),
            background: lerp_frame(from.background, to.background, t),
            overlay_alpha: lerp(from.overlay_alpha, to.overlay_alpha, t),
        }
    }
}
