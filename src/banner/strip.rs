// SPDX-License-Identifier: MPL-2.0
//! Vertical stack of action buttons anchored to the bottom of the screen.
//!
//! The strip is laid out off-screen below the bottom edge and slides up when
//! the banner expands. Rows are [`ACTION_HEIGHT`] tall with an
//! [`ACTION_SEPARATOR`] gap between consecutive rows.

use super::action::ActionItem;
use super::geometry;
use crate::config::{ACTION_HEIGHT, ACTION_SEPARATOR};
use iced::{Rectangle, Size};

/// Ordered action rows plus the strip's current vertical origin.
#[derive(Debug)]
pub struct ActionStrip {
    items: Vec<ActionItem>,
    screen: Size,
    origin_y: f32,
}

impl ActionStrip {
    /// Creates an empty strip resting at the bottom edge of `screen`.
    #[must_use]
    pub fn new(screen: Size) -> Self {
        Self {
            items: Vec::new(),
            screen,
            origin_y: screen.height,
        }
    }

    /// Appends an action, recomputes the height and moves the strip to its
    /// off-screen resting origin.
    ///
    /// Returns the new row's vertical offset inside the strip.
    pub fn add(&mut self, item: ActionItem) -> f32 {
        self.items.push(item);
        self.origin_y = self.resting_origin_y();
        self.height() - ACTION_HEIGHT
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total height: rows plus the separators between them.
    #[must_use]
    pub fn height(&self) -> f32 {
        strip_height(self.items.len())
    }

    /// Vertical offset of row `index` inside the strip.
    #[must_use]
    pub fn item_origin_y(index: usize) -> f32 {
        let k = index as f32;
        ACTION_HEIGHT * (k + 1.0) + ACTION_SEPARATOR * k - ACTION_HEIGHT
    }

    /// Off-screen origin the strip takes after actions are added.
    #[must_use]
    pub fn resting_origin_y(&self) -> f32 {
        self.screen.height + ACTION_HEIGHT * self.items.len() as f32
    }

    /// Origin with every row on screen, used by the expanded banner.
    #[must_use]
    pub fn expanded_origin_y(&self) -> f32 {
        self.screen.height - ACTION_HEIGHT * self.items.len() as f32
    }

    /// Origin the strip collapses to while the banner is dismissed.
    #[must_use]
    pub fn dismissed_origin_y(&self) -> f32 {
        self.screen.height
    }

    #[must_use]
    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    pub fn set_origin_y(&mut self, origin_y: f32) {
        self.origin_y = origin_y;
    }

    /// Frame of the strip at an arbitrary origin.
    #[must_use]
    pub fn frame_at(&self, origin_y: f32) -> Rectangle {
        geometry::frame(0.0, origin_y, self.screen.width, self.height())
    }

    /// Current frame of the strip.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame_at(self.origin_y)
    }

    /// Frame of row `index` in screen coordinates, given the strip origin.
    #[must_use]
    pub fn item_frame(&self, index: usize, origin_y: f32) -> Rectangle {
        geometry::frame(
            0.0,
            origin_y + Self::item_origin_y(index),
            self.screen.width,
            ACTION_HEIGHT,
        )
    }

    /// Index of the row under `y` (screen coordinates), if any.
    #[must_use]
    pub fn hit_test(&self, y: f32, origin_y: f32) -> Option<usize> {
        (0..self.items.len()).find(|&index| {
            let row = self.item_frame(index, origin_y);
            y >= row.y && y < row.y + row.height
        })
    }

    pub fn items(&self) -> impl Iterator<Item = &ActionItem> {
        self.items.iter()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ActionItem> {
        self.items.get_mut(index)
    }
}

/// Height of a strip holding `count` rows.
#[must_use]
pub fn strip_height(count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    ACTION_HEIGHT * count as f32 + ACTION_SEPARATOR * (count - 1) as f32
}
