// SPDX-License-Identifier: MPL-2.0
//! Font lookup for banner labels and action titles.
//!
//! Font names are checked against a [`FontBook`] when they are set, so an
//! unknown family is rejected with a [`ConfigurationError`] instead of
//! silently rendering with whatever the text backend falls back to.

use crate::error::ConfigurationError;
use iced::Font;

/// Families every book knows about.
const BUILTIN_FAMILIES: &[&str] = &[
    "Sans Serif",
    "Serif",
    "Monospace",
    "Helvetica Neue",
    "Avenir Next",
    "Georgia",
    "Menlo",
    "Fira Sans",
];

/// A resolved font: a known family (or the system default) and a point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRef {
    family: Option<&'static str>,
    size: f32,
}

impl FontRef {
    /// The system default font at the given size.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self { family: None, size }
    }

    #[must_use]
    pub fn family(&self) -> Option<&'static str> {
        self.family
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the same family at another size.
    #[must_use]
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    /// Converts to the font handed to the text renderer.
    #[must_use]
    pub fn to_iced(&self) -> Font {
        match self.family {
            Some(name) => Font::with_name(name),
            None => Font::DEFAULT,
        }
    }
}

/// Registry of font families the banner may be configured with.
#[derive(Debug, Clone)]
pub struct FontBook {
    families: Vec<&'static str>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self {
            families: BUILTIN_FAMILIES.to_vec(),
        }
    }
}

impl FontBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family, e.g. one loaded through `iced::font::load`.
    pub fn register(&mut self, family: &'static str) {
        if !self.contains(family) {
            self.families.push(family);
        }
    }

    /// Returns whether the family is known (case-insensitive).
    #[must_use]
    pub fn contains(&self, family: &str) -> bool {
        self.lookup(family).is_some()
    }

    fn lookup(&self, family: &str) -> Option<&'static str> {
        self.families
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(family))
    }

    /// Resolves an optional family name.
    ///
    /// `None` selects the system font; an unknown name is an error.
    pub fn resolve(
        &self,
        family: Option<&str>,
        size: f32,
    ) -> Result<FontRef, ConfigurationError> {
        match family {
            None => Ok(FontRef::system(size)),
            Some(name) => self
                .lookup(name)
                .map(|family| FontRef {
                    family: Some(family),
                    size,
                })
                .ok_or_else(|| ConfigurationError::UnknownFont(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_resolves_to_system_font() {
        let font = FontBook::new().resolve(None, 14.0).unwrap();
        assert_eq!(font.family(), None);
        assert_eq!(font.to_iced(), Font::DEFAULT);
    }

    #[test]
    fn known_family_resolves_case_insensitively() {
        let font = FontBook::new().resolve(Some("helvetica neue"), 16.0).unwrap();
        assert_eq!(font.family(), Some("Helvetica Neue"));
        assert_eq!(font.size(), 16.0);
    }

    #[test]
    fn unknown_family_is_rejected() {
        let err = FontBook::new()
            .resolve(Some("Papyrus Ultra"), 16.0)
            .unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownFont("Papyrus Ultra".into()));
    }

    #[test]
    fn registered_family_becomes_resolvable() {
        let mut book = FontBook::new();
        assert!(!book.contains("Inter"));
        book.register("Inter");
        book.register("Inter");
        assert!(book.contains("inter"));
        assert_eq!(
            book.families.iter().filter(|f| **f == "Inter").count(),
            1
        );
    }
}
