// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` is an in-app banner notification widget built on the Iced
//! GUI framework.
//!
//! Banners slide in from the top of their host, rest while a dismiss timer
//! runs and respond to vertical swipes: up to dismiss, down to expand into the
//! full message and an optional strip of action buttons.
//!
//! The core in [`banner`] is independent of any window system; [`ui`] draws it
//! on an Iced canvas and [`app`] is a small demo that hosts it.

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod gesture;
pub mod ui;
