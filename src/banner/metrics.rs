// SPDX-License-Identifier: MPL-2.0
//! Text measurement used to size the expanded message label.
//!
//! The banner only needs line breaks and a total height, so measurement is a
//! small trait. [`ShapedMetrics`] shapes text with the renderer's font system
//! and is the default; [`ApproximateMetrics`] estimates advances from the font
//! size and needs no fonts at all.

use super::font::FontRef;
use iced::advanced::graphics::text::Paragraph;
use iced::advanced::text::{self, Paragraph as _};
use iced::{Pixels, Size};

/// Line height shared by measurement and drawing.
pub const LINE_HEIGHT: text::LineHeight = text::LineHeight::Relative(1.2);

/// Measures single lines and wraps paragraphs to a width.
pub trait TextMetrics {
    /// Width of `text` laid out on a single line.
    fn line_width(&self, text: &str, font: FontRef) -> f32;

    /// Distance between consecutive baselines.
    fn line_height(&self, font: FontRef) -> f32;

    /// Greedy word wrap. Words wider than `width` are broken between
    /// characters. Explicit newlines are kept.
    fn wrap(&self, text: &str, width: f32, font: FontRef) -> Vec<String> {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();

            for word in paragraph.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };

                if self.line_width(&candidate, font) <= width {
                    current = candidate;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }

                if self.line_width(word, font) <= width {
                    current = word.to_string();
                } else {
                    for ch in word.chars() {
                        current.push(ch);
                        if self.line_width(&current, font) > width && current.chars().count() > 1 {
                            current.pop();
                            lines.push(std::mem::take(&mut current));
                            current.push(ch);
                        }
                    }
                }
            }

            lines.push(current);
        }

        lines
    }

    /// Height of the bounding box of `text` wrapped to `width`.
    fn height(&self, text: &str, width: f32, font: FontRef) -> f32 {
        self.wrap(text, width, font).len() as f32 * self.line_height(font)
    }
}

/// Measures with the same shaping the canvas uses to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapedMetrics;

impl ShapedMetrics {
    fn paragraph(content: &str, width: f32, font: FontRef) -> Paragraph {
        Paragraph::with_text(text::Text {
            content,
            bounds: Size::new(width, f32::INFINITY),
            size: Pixels(font.size()),
            line_height: LINE_HEIGHT,
            font: font.to_iced(),
            align_x: text::Alignment::Default,
            align_y: iced::alignment::Vertical::Top,
            shaping: text::Shaping::default(),
            wrapping: text::Wrapping::default(),
        })
    }
}

impl TextMetrics for ShapedMetrics {
    fn line_width(&self, text: &str, font: FontRef) -> f32 {
        Self::paragraph(text, f32::INFINITY, font).min_bounds().width
    }

    fn line_height(&self, font: FontRef) -> f32 {
        LINE_HEIGHT.to_absolute(Pixels(font.size())).0
    }

    fn height(&self, text: &str, width: f32, font: FontRef) -> f32 {
        let measured = Self::paragraph(text, width, font).min_bounds().height;
        // An empty message still occupies one line.
        measured.max(self.line_height(font))
    }
}

/// Advance-width estimate: every character is a fixed fraction of the size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMetrics {
    /// Average glyph advance as a fraction of the font size.
    pub advance: f32,
    /// Line height as a multiple of the font size.
    pub leading: f32,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            advance: 0.52,
            leading: 1.2,
        }
    }
}

impl TextMetrics for ApproximateMetrics {
    fn line_width(&self, text: &str, font: FontRef) -> f32 {
        text.chars().count() as f32 * font.size() * self.advance
    }

    fn line_height(&self, font: FontRef) -> f32 {
        font.size() * self.leading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten points per character, twenty per line.
    struct Fixed;

    impl TextMetrics for Fixed {
        fn line_width(&self, text: &str, _font: FontRef) -> f32 {
            text.chars().count() as f32 * 10.0
        }

        fn line_height(&self, _font: FontRef) -> f32 {
            20.0
        }
    }

    fn font() -> FontRef {
        FontRef::system(14.0)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(Fixed.wrap("hello there", 200.0, font()), vec!["hello there"]);
        assert_eq!(Fixed.height("hello there", 200.0, font()), 20.0);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = Fixed.wrap("one two three four", 90.0, font());
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert_eq!(Fixed.height("one two three four", 90.0, font()), 60.0);
    }

    #[test]
    fn breaks_words_longer_than_the_width() {
        let lines = Fixed.wrap("abcdefghij", 40.0, font());
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn keeps_explicit_newlines() {
        let lines = Fixed.wrap("first\nsecond", 500.0, font());
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(Fixed.wrap("", 100.0, font()), vec![String::new()]);
    }

    #[test]
    fn shaped_height_grows_with_wrapping() {
        let metrics = ShapedMetrics;
        let font = FontRef::system(14.0);
        let text = "Design review starts in ten minutes in room 4B, bring the updated mockups.";

        let single = metrics.height(text, f32::INFINITY, font);
        let narrow = metrics.height(text, 120.0, font);
        assert!((single - metrics.line_height(font)).abs() < 1.0);
        assert!(narrow >= 2.0 * metrics.line_height(font) - 1.0);
        assert!(metrics.line_width(text, font) > 120.0);
    }

    #[test]
    fn shaped_width_depends_on_the_font() {
        let metrics = ShapedMetrics;
        let regular = metrics.line_width("Banner", FontRef::system(14.0));
        let larger = metrics.line_width("Banner", FontRef::system(28.0));
        assert!(regular > 0.0);
        assert!(larger > regular * 1.5);
        assert!((metrics.height("", 200.0, FontRef::system(10.0)) - 12.0).abs() < 0.5);
    }

    #[test]
    fn approximate_metrics_scale_with_size() {
        let metrics = ApproximateMetrics::default();
        let small = metrics.line_width("banner", FontRef::system(10.0));
        let large = metrics.line_width("banner", FontRef::system(20.0));
        assert!((large - 2.0 * small).abs() < f32::EPSILON * 10.0);
        assert!((metrics.line_height(FontRef::system(10.0)) - 12.0).abs() < 1e-4);
    }
}
