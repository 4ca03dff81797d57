// SPDX-License-Identifier: MPL-2.0
//! Demo application: a list of sample notifications over a phone-sized window.
//!
//! Pressing a sample presents it as a banner. The window's [`HostWindow`] is
//! the banner host, pointer input from the canvas goes through a
//! [`PanRecognizer`], and banner callbacks report back over a channel so
//! they can be listed under the samples.

mod message;
mod samples;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Notice};
pub use samples::{Sample, SAMPLES};

use crate::banner::{Banner, HostWindow, Style};
use crate::config::{self, Config};
use crate::gesture::PanRecognizer;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 390.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 844.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Callback notices kept for display.
const NOTICE_HISTORY: usize = 6;

/// Root state of the demo.
pub struct App {
    window: HostWindow,
    config: Config,
    style: Style,
    banners: Vec<Banner>,
    recognizer: PanRecognizer,
    /// Row of the top banner's action strip under a pending press.
    pressed_action: Option<usize>,
    notices: Vec<Notice>,
    notice_tx: mpsc::Sender<Notice>,
    notice_rx: mpsc::Receiver<Notice>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("style", &self.style)
            .field("banners", &self.banners.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Folds CLI flags over the loaded configuration.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(style) = flags.style {
        config.banner.style = Some(style);
    }
    if flags.expandable {
        config.banner.expandable = Some(true);
    }
    if let Some(secs) = flags.dismiss_delay {
        config.banner.dismiss_delay_secs = Some(config::clamp_dismiss_delay(secs));
    }
    if flags.single_shot {
        config.banner.timer_mode = Some(crate::banner::TimerMode::SingleShot);
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        apply_flags(&mut config, &flags);

        let style = config.banner.style.unwrap_or_else(Style::from_system);
        config.banner.style = Some(style);

        let window = HostWindow::new(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
            .with_reduce_transparency(config.accessibility.reduce_transparency.unwrap_or(false));

        tracing::info!(?style, banner = ?config.banner, "demo ready");

        let (notice_tx, notice_rx) = mpsc::channel();
        let app = App {
            window,
            config,
            style,
            banners: Vec::new(),
            recognizer: PanRecognizer::new(),
            pressed_action: None,
            notices: Vec::new(),
            notice_tx,
            notice_rx,
            config_warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.banners.last() {
            Some(banner) => format!("Iced Banner ({:?})", banner.phase()),
            None => "Iced Banner".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        match self.style {
            Style::Light => Theme::Light,
            Style::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(!self.banners.is_empty()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            window: &mut self.window,
            config: &self.config,
            banners: &mut self.banners,
            recognizer: &mut self.recognizer,
            pressed_action: &mut self.pressed_action,
            notice_tx: &self.notice_tx,
        };

        match message {
            Message::Present(index) => update::handle_present(&mut ctx, index),
            Message::Pointer(pointer) => update::handle_pointer(&mut ctx, pointer),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowResized(size) => ctx.window.set_bounds(size),
        }

        self.collect_notices();
        Task::none()
    }

    fn collect_notices(&mut self) {
        self.notices.extend(self.notice_rx.try_iter());
        let overflow = self.notices.len().saturating_sub(NOTICE_HISTORY);
        self.notices.drain(..overflow);
    }
}
