// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for banners.
//!
//! - [`design_tokens`] - Design system constants (colors, opacity, radii, type sizes)
//! - [`banner_canvas`] - Canvas program that draws presented banners and
//!   forwards pointer input

pub mod banner_canvas;
pub mod design_tokens;
