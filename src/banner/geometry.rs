// SPDX-License-Identifier: MPL-2.0
//! Frame arithmetic shared by the state machine and the renderer.
//!
//! Frames follow screen coordinates: origin at the top-left, y grows downward.

use iced::{Point, Rectangle, Size};

/// Builds a frame from its components.
#[must_use]
pub fn frame(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

/// Returns the frame's center point.
#[must_use]
pub fn center(frame: Rectangle) -> Point {
    Point::new(frame.x + frame.width / 2.0, frame.y + frame.height / 2.0)
}

/// Moves a frame so its vertical center sits at `center_y`.
#[must_use]
pub fn with_center_y(frame: Rectangle, center_y: f32) -> Rectangle {
    Rectangle {
        y: center_y - frame.height / 2.0,
        ..frame
    }
}

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Component-wise interpolation between two frames.
#[must_use]
pub fn lerp_frame(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    frame(
        lerp(from.x, to.x, t),
        lerp(from.y, to.y, t),
        lerp(from.width, to.width, t),
        lerp(from.height, to.height, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_collapsed_banner() {
        let banner = frame(0.0, 0.0, 390.0, 95.0);
        assert_eq!(center(banner), Point::new(195.0, 47.5));
    }

    #[test]
    fn with_center_y_keeps_size() {
        let banner = frame(0.0, -95.0, 390.0, 95.0);
        let moved = with_center_y(banner, 47.5);
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.height, 95.0);
        assert_eq!(moved.width, 390.0);
    }

    #[test]
    fn lerp_frame_hits_endpoints() {
        let from = frame(0.0, -95.0, 390.0, 95.0);
        let to = frame(0.0, 0.0, 390.0, 140.0);
        assert_eq!(lerp_frame(from, to, 0.0), from);
        assert_eq!(lerp_frame(from, to, 1.0), to);
        assert_eq!(lerp_frame(from, to, 0.5).y, -47.5);
    }
}
