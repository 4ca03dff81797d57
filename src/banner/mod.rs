// SPDX-License-Identifier: MPL-2.0
//! In-app banner notifications.
//!
//! A [`Banner`] slides in from the top edge of its [`Host`], rests while a
//! dismiss timer runs, and reacts to vertical pans: a fast upward swipe
//! dismisses it, a fast downward pull expands it to show the full message
//! and any [`ActionItem`]s, and a slow drag snaps back.
//!
//! The behavior lives in [`Presentation`], a pure state machine that turns
//! [`Event`]s into [`Effect`]s. [`Banner`] applies those effects to the host,
//! the [`DismissTimer`] and the [`Animator`].
//!
//! # Examples
//!
//! ```
//! use iced::Size;
//! use iced_banner::banner::{Banner, HostWindow, Phase, Style};
//! use std::time::{Duration, Instant};
//!
//! let mut window = HostWindow::new(Size::new(390.0, 844.0));
//! let mut banner = Banner::new("Build finished", "All 212 tests passed", Style::Dark, &window);
//!
//! let start = Instant::now();
//! banner.present(&mut window, start).unwrap();
//! banner.tick(&mut window, start + Duration::from_millis(500));
//! assert_eq!(banner.phase(), Phase::Resting);
//! ```

mod action;
mod animation;
mod controller;
mod font;
pub mod geometry;
mod host;
mod layout;
mod metrics;
mod state;
mod strip;
mod style;
mod timer;

pub use action::{ActionDelegate, ActionItem, Callback};
pub use animation::{ease_in_out, Animator, Completion};
pub use controller::{ActionSnapshot, Banner, Snapshot};
pub use font::{FontBook, FontRef};
pub use host::{Host, HostWindow, Layer};
pub use layout::Layout;
pub use metrics::{ApproximateMetrics, ShapedMetrics, TextMetrics, LINE_HEIGHT};
pub use state::{
    swipe_time, Appearance, Effect, Event, PanEvent, PanPhase, Phase, Presentation, StripOrigins,
    TapTarget,
};
pub use strip::{strip_height, ActionStrip};
pub use style::Style;
pub use timer::{DismissTimer, TimerMode};
