// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, opacities and radii used to draw the banner.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Radius**: Corner radii
- **Typography**: Font size scale

## Examples

```
use iced_banner::ui::design_tokens::{palette, opacity};
use iced::Color;

let dim = Color {
    a: opacity::OVERLAY_DIM,
    ..palette::BLACK
};
assert_eq!(dim.a, 0.3);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Dark gray image placeholder.
    pub const IMAGE_PLACEHOLDER: Color = Color::from_rgb(0.333, 0.333, 0.333);

    /// Grabber handle (brightness 0.85).
    pub const GRABBER: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Action strip background visible through the separators (brightness 0.8).
    pub const SEPARATOR: Color = Color::from_rgb(0.8, 0.8, 0.8);

    /// Default action tint.
    pub const ACTION_TINT: Color = Color::from_rgb(0.0, 0.478, 1.0);

    /// Destructive action tint.
    pub const ACTION_DESTRUCTIVE: Color = Color::from_rgb(1.0, 0.231, 0.188);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const BORDER: f32 = 0.15;
    pub const OVERLAY_DIM: f32 = 0.3;
    pub const HIGHLIGHTED: f32 = 0.5;
    /// Translucent surface standing in for a blur effect.
    pub const BLUR_SURFACE: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const GRABBER: f32 = 2.5;
    pub const IMAGE: f32 = 25.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 16.0;
    pub const MESSAGE: f32 = 14.0;
    pub const ACTION: f32 = 16.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT < opacity::BORDER);
    assert!(opacity::BORDER < opacity::OVERLAY_DIM);
    assert!(opacity::OVERLAY_DIM < opacity::HIGHLIGHTED);
    assert!(opacity::HIGHLIGHTED < opacity::BLUR_SURFACE);
    assert!(opacity::BLUR_SURFACE < opacity::OPAQUE);
    assert!(typography::MESSAGE < typography::TITLE);
};
