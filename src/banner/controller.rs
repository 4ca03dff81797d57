// SPDX-License-Identifier: MPL-2.0
//! The banner handle callers build, configure and present.
//!
//! [`Banner`] wires the pure [`Presentation`] state machine to the things it
//! cannot own itself: the injected [`Host`], the [`DismissTimer`], the
//! [`Animator`] and the caller's callbacks. All entry points take `now` so
//! the host decides what time it is.

use super::action::{ActionDelegate, ActionItem, Callback};
use super::animation::Animator;
use super::font::{FontBook, FontRef};
use super::host::Host;
use super::layout::Layout;
use super::metrics::{ShapedMetrics, TextMetrics};
use super::state::{
    Appearance, Effect, Event, PanEvent, Phase, Presentation, StripOrigins, TapTarget,
};
use super::strip::ActionStrip;
use super::style::Style;
use super::timer::{DismissTimer, TimerMode};
use crate::config::{
    self, BannerConfig, ACTION_FONT_SIZE, DEFAULT_DISMISS_DELAY_SECS, LABEL_HORIZONTAL_INSET,
    MESSAGE_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::error::{ConfigurationError, Result};
use iced::widget::image;
use iced::{Color, Size};
use std::fmt;
use std::time::{Duration, Instant};

/// A single banner notification.
pub struct Banner {
    title: String,
    message: String,
    style: Style,
    image: Option<image::Handle>,
    title_font: FontRef,
    title_color: Option<Color>,
    message_font: FontRef,
    message_color: Option<Color>,
    fonts: FontBook,
    metrics: Box<dyn TextMetrics + Send>,
    screen: Size,
    strip: ActionStrip,
    presentation: Presentation,
    timer: DismissTimer,
    animator: Animator,
    on_tap: Option<Callback>,
    on_dismiss: Option<Callback>,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("title", &self.title)
            .field("phase", &self.presentation.phase())
            .field("actions", &self.strip.len())
            .finish()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub phase: Phase,
    pub layout: Layout,
    pub appearance: Appearance,
    pub style: Style,
    pub title: String,
    pub title_font: FontRef,
    pub title_color: Color,
    /// Message text; newlines are folded into spaces until the banner wraps.
    pub message: String,
    /// Width the message wraps at.
    pub message_width: f32,
    pub message_font: FontRef,
    pub message_color: Color,
    pub image: Option<image::Handle>,
    pub actions: Vec<ActionSnapshot>,
}

/// Renderable part of an action row.
#[derive(Debug, Clone)]
pub struct ActionSnapshot {
    pub title: String,
    pub font: FontRef,
    pub tint: Color,
    pub highlighted_tint: Color,
}

/// Forwards action selection into the state machine while the handler that
/// triggered it is still borrowed.
struct SelectionDelegate<'a> {
    presentation: &'a mut Presentation,
    effects: Vec<Effect>,
}

impl ActionDelegate for SelectionDelegate<'_> {
    fn action_selected(&mut self) {
        self.effects
            .extend(self.presentation.handle(Event::ActionSelected));
    }
}

impl Banner {
    /// Creates a banner sized to the host's screen bounds.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        style: Style,
        host: &dyn Host,
    ) -> Self {
        let screen = host.bounds();
        Self {
            title: title.into(),
            message: message.into(),
            style,
            image: None,
            title_font: FontRef::system(TITLE_FONT_SIZE),
            title_color: None,
            message_font: FontRef::system(MESSAGE_FONT_SIZE),
            message_color: None,
            fonts: FontBook::new(),
            metrics: Box::new(ShapedMetrics),
            screen,
            strip: ActionStrip::new(screen),
            presentation: Presentation::new(screen),
            timer: DismissTimer::new(
                Duration::from_secs_f64(DEFAULT_DISMISS_DELAY_SECS),
                TimerMode::default(),
            ),
            animator: Animator::new(),
            on_tap: None,
            on_dismiss: None,
        }
    }

    /// Creates a banner and applies the `[banner]` section of a config.
    pub fn from_config(
        title: impl Into<String>,
        message: impl Into<String>,
        config: &BannerConfig,
        host: &dyn Host,
    ) -> Self {
        let style = config.style.unwrap_or_else(Style::from_system);
        let mut banner = Self::new(title, message, style, host);
        banner.presentation.set_expandable(config.expandable.unwrap_or(false));
        banner.timer.set_delay(config.dismiss_delay());
        let mode = config.timer_mode.unwrap_or_default();
        banner.timer.set_mode(mode);
        banner.presentation.set_timer_mode(mode);
        banner
    }

    fn ensure_configurable(&self) -> Result<()> {
        if self.presentation.phase() == Phase::Hidden {
            Ok(())
        } else {
            tracing::warn!(title = %self.title, "configuration change after present rejected");
            Err(ConfigurationError::PresentationStarted.into())
        }
    }

    fn resolve_font(&self, family: Option<&str>, size: f32) -> Result<FontRef> {
        self.fonts.resolve(family, size).map_err(|err| {
            tracing::warn!(%err, "font rejected");
            err.into()
        })
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Font registry used to validate family names.
    pub fn fonts_mut(&mut self) -> &mut FontBook {
        &mut self.fonts
    }

    /// Resolves an action font at the action title size.
    pub fn action_font(&self, family: Option<&str>) -> Result<FontRef> {
        self.resolve_font(family, ACTION_FONT_SIZE)
    }

    /// Sets the title font and color; `None` keeps the defaults.
    pub fn set_title_font(&mut self, family: Option<&str>, color: Option<Color>) -> Result<()> {
        self.ensure_configurable()?;
        self.title_font = self.resolve_font(family, TITLE_FONT_SIZE)?;
        self.title_color = color;
        Ok(())
    }

    /// Sets the message font and color; `None` keeps the defaults.
    pub fn set_message_font(&mut self, family: Option<&str>, color: Option<Color>) -> Result<()> {
        self.ensure_configurable()?;
        self.message_font = self.resolve_font(family, MESSAGE_FONT_SIZE)?;
        self.message_color = color;
        Ok(())
    }

    pub fn set_expandable(&mut self, expandable: bool) -> Result<()> {
        self.ensure_configurable()?;
        self.presentation.set_expandable(expandable);
        Ok(())
    }

    pub fn set_image(&mut self, image: image::Handle) -> Result<()> {
        self.ensure_configurable()?;
        self.image = Some(image);
        Ok(())
    }

    /// Sets how long the banner rests before the timer fires; clamped to the
    /// supported range.
    pub fn set_dismiss_delay(&mut self, delay: Duration) -> Result<()> {
        self.ensure_configurable()?;
        let secs = config::clamp_dismiss_delay(delay.as_secs_f64());
        self.timer.set_delay(Duration::from_secs_f64(secs));
        Ok(())
    }

    pub fn set_timer_mode(&mut self, mode: TimerMode) -> Result<()> {
        self.ensure_configurable()?;
        self.timer.set_mode(mode);
        self.presentation.set_timer_mode(mode);
        Ok(())
    }

    /// Replaces the text measurement used to size the expanded message.
    pub fn set_metrics(&mut self, metrics: impl TextMetrics + Send + 'static) {
        self.metrics = Box::new(metrics);
    }

    /// Called when the banner itself is tapped.
    pub fn on_tap(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_tap = Some(Box::new(callback));
    }

    /// Called once, when the dismissal animation has finished.
    pub fn on_dismiss(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// Appends an action row.
    pub fn add_action(&mut self, action: ActionItem) -> Result<()> {
        self.ensure_configurable()?;
        let offset = self.strip.add(action);
        self.presentation.set_strip(Some(StripOrigins {
            resting: self.strip.resting_origin_y(),
            expanded: self.strip.expanded_origin_y(),
            dismissed: self.strip.dismissed_origin_y(),
        }));
        tracing::debug!(count = self.strip.len(), offset, "action added");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Attaches the banner to the host and slides it in.
    pub fn present(&mut self, host: &mut dyn Host, now: Instant) -> Result<()> {
        self.ensure_configurable()?;
        let message_height =
            self.metrics
                .height(&self.message, self.label_width(), self.message_font);
        tracing::info!(title = %self.title, actions = self.strip.len(), "presenting banner");
        self.dispatch(
            Event::Present {
                message_height,
                reduce_transparency: host.reduce_transparency(),
            },
            host,
            now,
        );
        Ok(())
    }

    /// Feeds one pan sample.
    pub fn pan(&mut self, pan: PanEvent, host: &mut dyn Host, now: Instant) {
        self.dispatch(Event::Pan(pan), host, now);
    }

    /// Feeds a tap on the banner or on the screen overlay.
    pub fn tap(&mut self, target: TapTarget, host: &mut dyn Host, now: Instant) {
        self.dispatch(Event::Tap(target), host, now);
    }

    /// Activates the action at `index`: the banner starts dismissing, then
    /// the action's handler runs.
    pub fn select_action(
        &mut self,
        index: usize,
        host: &mut dyn Host,
        now: Instant,
    ) -> Result<()> {
        if !self.presentation.phase().is_live() {
            return Ok(());
        }

        let drawn = self.animator.sample(now, self.presentation.layout());
        let item = self
            .strip
            .get_mut(index)
            .ok_or(ConfigurationError::NoSuchAction(index))?;
        tracing::debug!(index, title = item.title(), "action selected");

        let mut delegate = SelectionDelegate {
            presentation: &mut self.presentation,
            effects: Vec::new(),
        };
        item.activate(Some(&mut delegate));
        let effects = delegate.effects;

        self.apply(effects, drawn, host, now);
        Ok(())
    }

    /// Advances animations and the dismiss timer.
    ///
    /// Returns `false` once the banner has been removed from the host.
    pub fn tick(&mut self, host: &mut dyn Host, now: Instant) -> bool {
        for completion in self.animator.poll(now) {
            self.dispatch(Event::AnimationFinished(completion), host, now);
        }

        if self.timer.poll(now) {
            self.dispatch(Event::TimerFired, host, now);
        }

        self.presentation.phase() != Phase::Removed
    }

    fn dispatch(&mut self, event: Event, host: &mut dyn Host, now: Instant) {
        let drawn = self.animator.sample(now, self.presentation.layout());
        let effects = self.presentation.handle(event);
        self.apply(effects, drawn, host, now);
    }

    fn apply(&mut self, effects: Vec<Effect>, drawn: Layout, host: &mut dyn Host, now: Instant) {
        for effect in effects {
            match effect {
                Effect::Attach(layer) => host.attach(layer),
                Effect::Detach(layer) => host.detach(layer),
                Effect::Animate {
                    duration,
                    completion,
                } => self.animator.start(now, drawn, duration, completion),
                Effect::ArmTimer => self.timer.arm(now),
                Effect::CancelTimer => self.timer.cancel(),
                Effect::InvokeTap => {
                    if let Some(callback) = self.on_tap.as_mut() {
                        callback();
                    }
                }
                Effect::InvokeDismiss => {
                    self.animator.clear();
                    if let Some(callback) = self.on_dismiss.as_mut() {
                        callback();
                    }
                }
                Effect::Haptic => host.haptic_impact(),
            }
        }
        self.strip
            .set_origin_y(self.presentation.layout().strip_origin_y);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.presentation.phase()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.presentation.is_expanded()
    }

    /// Whether the dimming overlay is shown and accepts taps.
    #[must_use]
    pub fn is_overlay_visible(&self) -> bool {
        self.presentation.phase().is_live() && self.presentation.appearance().overlay_visible
    }

    #[must_use]
    pub fn origin(&self) -> iced::Point {
        self.presentation.origin()
    }

    /// Geometry on screen at `now`, with running transitions interpolated.
    #[must_use]
    pub fn layout(&self, now: Instant) -> Layout {
        self.animator.sample(now, self.presentation.layout())
    }

    /// Geometry every running transition is heading to.
    #[must_use]
    pub fn target_layout(&self) -> &Layout {
        self.presentation.layout()
    }

    #[must_use]
    pub fn strip(&self) -> &ActionStrip {
        &self.strip
    }

    #[must_use]
    pub fn timer(&self) -> &DismissTimer {
        &self.timer
    }

    /// Whether a transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    #[must_use]
    pub fn screen(&self) -> Size {
        self.screen
    }

    fn label_width(&self) -> f32 {
        self.screen.width - LABEL_HORIZONTAL_INSET
    }

    /// Geometry and content to draw at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let appearance = self.presentation.appearance();
        let flat = appearance.flat_background;

        let message = if appearance.message_wraps {
            self.message.clone()
        } else {
            self.message.replace('\n', " ")
        };

        Snapshot {
            phase: self.presentation.phase(),
            layout: self.layout(now),
            appearance,
            style: self.style,
            title: self.title.clone(),
            title_font: self.title_font,
            title_color: self
                .title_color
                .unwrap_or_else(|| self.style.title_color(flat)),
            message,
            message_width: self.label_width(),
            message_font: self.message_font,
            message_color: self
                .message_color
                .unwrap_or_else(|| self.style.message_color(flat)),
            image: self.image.clone(),
            actions: self
                .strip
                .items()
                .map(|item| ActionSnapshot {
                    title: item.title().to_string(),
                    font: item.font(),
                    tint: item.tint(),
                    highlighted_tint: item.highlighted_tint(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::host::{HostWindow, Layer};
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn window() -> HostWindow {
        HostWindow::new(Size::new(390.0, 844.0))
    }

    #[test]
    fn present_attaches_and_settles_at_origin() {
        let mut host = window();
        let mut banner = Banner::new("Title", "Message", Style::Light, &host);
        let start = Instant::now();

        banner.present(&mut host, start).unwrap();
        assert_eq!(host.layers(), &[Layer::Overlay, Layer::Banner]);
        assert_eq!(banner.phase(), Phase::Presenting);

        let mid = banner.snapshot(start + Duration::from_millis(250));
        assert!(mid.layout.frame.y < 0.0 && mid.layout.frame.y > -95.0);

        assert!(banner.tick(&mut host, start + Duration::from_millis(500)));
        assert_eq!(banner.phase(), Phase::Resting);
        assert_eq!(banner.origin().y, 47.5);
        assert!(banner.timer().is_armed());
    }

    #[test]
    fn setters_after_present_are_rejected() {
        let mut host = window();
        let mut banner = Banner::new("Title", "Message", Style::Dark, &host);
        banner.present(&mut host, Instant::now()).unwrap();

        assert_eq!(
            banner.set_expandable(true),
            Err(Error::Configuration(ConfigurationError::PresentationStarted))
        );
        assert!(banner.present(&mut host, Instant::now()).is_err());
    }

    #[test]
    fn unknown_font_is_rejected_at_setter_time() {
        let host = window();
        let mut banner = Banner::new("Title", "Message", Style::Light, &host);
        let err = banner
            .set_title_font(Some("Nonexistent Sans"), None)
            .unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::UnknownFont("Nonexistent Sans".into()))
        );
        assert!(banner
            .set_message_font(Some("Georgia"), Some(Color::BLACK))
            .is_ok());
    }

    #[test]
    fn dismiss_delay_is_clamped() {
        let host = window();
        let mut banner = Banner::new("Title", "Message", Style::Light, &host);
        banner.set_dismiss_delay(Duration::ZERO).unwrap();
        assert_eq!(banner.timer().delay(), Duration::from_millis(500));
    }

    #[test]
    fn selecting_an_action_dismisses_then_runs_handler() {
        let mut host = window();
        let mut banner = Banner::new("Title", "Message", Style::Light, &host);
        let phase_seen = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&phase_seen);
        let font = banner.action_font(None).unwrap();
        banner
            .add_action(ActionItem::new("Reply", font, Color::BLACK, move || {
                seen.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        let start = Instant::now();
        banner.present(&mut host, start).unwrap();
        banner.tick(&mut host, start + Duration::from_millis(500));

        banner
            .select_action(0, &mut host, start + Duration::from_secs(1))
            .unwrap();
        assert_eq!(banner.phase(), Phase::Dismissing);
        assert_eq!(phase_seen.load(Ordering::SeqCst), 1);

        assert_eq!(
            banner.select_action(3, &mut host, start + Duration::from_secs(1)),
            Ok(())
        );
    }

    #[test]
    fn unknown_action_index_is_an_error() {
        let mut host = window();
        let mut banner = Banner::new("Title", "Message", Style::Light, &host);
        banner.present(&mut host, Instant::now()).unwrap();
        assert_eq!(
            banner.select_action(2, &mut host, Instant::now()),
            Err(Error::Configuration(ConfigurationError::NoSuchAction(2)))
        );
    }

    /// Reports a fixed number of 20-point rows for any text.
    struct Rows(usize);

    impl TextMetrics for Rows {
        fn line_width(&self, _text: &str, _font: FontRef) -> f32 {
            0.0
        }

        fn line_height(&self, _font: FontRef) -> f32 {
            20.0
        }

        fn height(&self, _text: &str, _width: f32, _font: FontRef) -> f32 {
            self.0 as f32 * 20.0
        }
    }

    #[test]
    fn expansion_uses_the_measured_message_height() {
        let mut host = window();
        let mut banner = Banner::new("Title", "Message", Style::Light, &host);
        banner.set_expandable(true).unwrap();
        banner.set_metrics(Rows(3));

        let start = Instant::now();
        banner.present(&mut host, start).unwrap();
        let settled = start + Duration::from_millis(500);
        banner.tick(&mut host, settled);
        banner.pan(PanEvent::began(20.0, 800.0), &mut host, settled);
        banner.pan(PanEvent::ended(5.0, 800.0), &mut host, settled);

        assert!(banner.is_expanded());
        assert_eq!(banner.target_layout().message_height, 60.0);
        assert_eq!(banner.target_layout().frame.height, 130.0);
    }

    #[test]
    fn shaped_measurement_follows_the_message_font() {
        let message = "The nightly pipeline failed in the integration stage while \
                       waiting for the staging database.";
        let measure = |size: f32| {
            let mut host = window();
            let mut banner = Banner::new("Title", message, Style::Light, &host);
            banner.set_expandable(true).unwrap();
            banner.message_font = FontRef::system(size);
            let start = Instant::now();
            banner.present(&mut host, start).unwrap();
            let settled = start + Duration::from_millis(500);
            banner.tick(&mut host, settled);
            banner.pan(PanEvent::began(20.0, 800.0), &mut host, settled);
            banner.pan(PanEvent::ended(5.0, 800.0), &mut host, settled);
            banner.target_layout().message_height
        };

        assert!(measure(28.0) > measure(14.0));
    }

    #[test]
    fn snapshot_keeps_message_on_one_line_until_expanded() {
        let host = window();
        let banner = Banner::new("Title", "first\nsecond", Style::Dark, &host);
        let snapshot = banner.snapshot(Instant::now());
        assert_eq!(snapshot.message, "first second");
        assert_eq!(snapshot.message_width, 300.0);
        assert_eq!(snapshot.title_color, Style::Dark.title_color(false));
        assert!(snapshot.actions.is_empty());
    }
}
