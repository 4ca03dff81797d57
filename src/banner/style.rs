// SPDX-License-Identifier: MPL-2.0
//! Light and dark banner styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Blur style of the banner background.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Light,
    Dark,
}

impl Style {
    /// Picks the style matching the desktop theme; light when detection fails.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Style::Dark
        } else {
            Style::Light
        }
    }

    /// Translucent surface drawn where the platform would blur.
    #[must_use]
    pub fn blur_surface(self) -> Color {
        let base = match self {
            Style::Light => palette::WHITE,
            Style::Dark => palette::GRAY_900,
        };
        Color {
            a: opacity::BLUR_SURFACE,
            ..base
        }
    }

    /// Flat background used after expansion or when transparency is reduced.
    #[must_use]
    pub fn flat_surface(self) -> Color {
        palette::WHITE
    }

    /// Default title color.
    #[must_use]
    pub fn title_color(self, flat: bool) -> Color {
        match (self, flat) {
            (Style::Dark, false) => palette::WHITE,
            _ => palette::BLACK,
        }
    }

    /// Default message color.
    #[must_use]
    pub fn message_color(self, flat: bool) -> Color {
        match (self, flat) {
            (Style::Dark, false) => Color::from_rgb(0.85, 0.85, 0.85),
            _ => palette::GRAY_700,
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Style::Light),
            "dark" => Ok(Style::Dark),
            other => Err(format!("invalid style: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_surface_is_translucent() {
        assert!(Style::Light.blur_surface().a < 1.0);
        assert!(Style::Dark.blur_surface().a < 1.0);
        assert_ne!(Style::Light.blur_surface(), Style::Dark.blur_surface());
    }

    #[test]
    fn flat_surface_is_opaque_white() {
        assert_eq!(Style::Dark.flat_surface(), palette::WHITE);
    }

    #[test]
    fn dark_text_turns_black_on_flat_background() {
        assert_eq!(Style::Dark.title_color(false), palette::WHITE);
        assert_eq!(Style::Dark.title_color(true), palette::BLACK);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<Style>(), Ok(Style::Dark));
        assert_eq!("light".parse::<Style>(), Ok(Style::Light));
        assert!("sepia".parse::<Style>().is_err());
    }
}
