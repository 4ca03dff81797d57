// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::banner::Style;
use crate::ui::banner_canvas::Pointer;
use iced::Size;
use std::fmt;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present the sample notification at this index.
    Present(usize),
    /// Pointer activity over the banner canvas.
    Pointer(Pointer),
    /// Frame tick driving animations and dismiss timers.
    Tick(Instant),
    /// The main window changed size.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to override configured behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Banner style; otherwise the config value or the system theme.
    pub style: Option<Style>,
    /// Allow fast downward pulls to expand banners.
    pub expandable: bool,
    /// Dismiss delay in seconds.
    pub dismiss_delay: Option<f64>,
    /// Dismiss for real when the timer fires instead of sliding away.
    pub single_shot: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_BANNER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

/// Callback activity reported back from presented banners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Tapped(String),
    Dismissed(String),
    Action { banner: String, action: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Tapped(title) => write!(f, "Tapped \"{title}\""),
            Notice::Dismissed(title) => write!(f, "Dismissed \"{title}\""),
            Notice::Action { banner, action } => write!(f, "\"{action}\" on \"{banner}\""),
        }
    }
}
