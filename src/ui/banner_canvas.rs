// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for presented banners.
//!
//! Draws every banner snapshot into a screen-sized canvas and forwards the
//! left-button pointer stream so the application can run gesture recognition
//! and hit testing against the same coordinates it draws in.

use crate::banner::{strip_height, ActionStrip, Phase, Snapshot, LINE_HEIGHT};
use crate::config::{
    ACTION_HEIGHT, BORDER_THICKNESS, GRABBER_HEIGHT, GRABBER_WIDTH, IMAGE_INSET_X, IMAGE_INSET_Y,
    IMAGE_SIZE, LABEL_X, MESSAGE_Y, TITLE_Y,
};
use crate::ui::design_tokens::{opacity, palette, radius};
use iced::advanced::text::Alignment;
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::{mouse, Color, Point, Rectangle, Size};

/// Pointer activity inside the canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    Left,
}

/// Renders banners and publishes pointer input.
pub struct BannerCanvas<Message> {
    snapshots: Vec<Snapshot>,
    pressed_action: Option<usize>,
    on_pointer: fn(Pointer) -> Message,
}

impl<Message> BannerCanvas<Message> {
    /// `snapshots` are drawn bottom first; the last one is on top.
    pub fn new(snapshots: Vec<Snapshot>, on_pointer: fn(Pointer) -> Message) -> Self {
        Self {
            snapshots,
            pressed_action: None,
            on_pointer,
        }
    }

    /// Draws the given row of the top banner's strip highlighted.
    #[must_use]
    pub fn pressed_action(mut self, index: Option<usize>) -> Self {
        self.pressed_action = index;
        self
    }

    /// Whether a press at `position` belongs to a banner rather than to
    /// whatever is underneath.
    fn claims(&self, position: Point) -> bool {
        self.snapshots.iter().any(|snapshot| {
            if !snapshot.phase.is_live() {
                return false;
            }
            let layout = &snapshot.layout;
            let strip = Rectangle::new(
                Point::new(0.0, layout.strip_origin_y),
                Size::new(layout.frame.width, strip_height(snapshot.actions.len())),
            );
            layout.overlay_alpha > 0.0
                || layout.frame.contains(position)
                || strip.contains(position)
        })
    }

    fn draw_banner(frame: &mut Frame, screen: Size, snapshot: &Snapshot) {
        let layout = &snapshot.layout;
        let appearance = snapshot.appearance;
        let banner = layout.frame;

        // Screen overlay.
        let dim = opacity::OVERLAY_DIM * layout.overlay_alpha;
        if dim > 0.0 {
            frame.fill_rectangle(Point::ORIGIN, screen, with_alpha(palette::BLACK, dim));
        }

        // Background extends above the banner so pulls look like stretching.
        let surface = if appearance.flat_background {
            snapshot.style.flat_surface()
        } else {
            snapshot.style.blur_surface()
        };
        frame.fill_rectangle(
            Point::new(banner.x + layout.background.x, banner.y + layout.background.y),
            layout.background.size(),
            surface,
        );

        if appearance.shadow {
            frame.fill_rectangle(
                Point::new(banner.x, banner.y + banner.height),
                Size::new(banner.width, 3.0),
                with_alpha(palette::BLACK, opacity::BORDER / 2.0),
            );
        }

        if appearance.border_visible {
            frame.fill_rectangle(
                Point::new(banner.x, banner.y + banner.height - BORDER_THICKNESS),
                Size::new(banner.width, BORDER_THICKNESS),
                with_alpha(palette::BLACK, opacity::BORDER),
            );
        }

        let content = layout.content_frame();

        if snapshot.image.is_some() {
            let center = Point::new(
                content.x + IMAGE_INSET_X + IMAGE_SIZE / 2.0,
                content.y + IMAGE_INSET_Y + IMAGE_SIZE / 2.0,
            );
            frame.fill(&Path::circle(center, radius::IMAGE), palette::IMAGE_PLACEHOLDER);
        }

        frame.fill_text(Text {
            content: snapshot.title.clone(),
            position: Point::new(content.x + LABEL_X, content.y + TITLE_Y),
            color: snapshot.title_color,
            size: snapshot.title_font.size().into(),
            font: snapshot.title_font.to_iced(),
            ..Text::default()
        });

        // Wrapped by the renderer; rows past the label height are clipped.
        let label = Rectangle::new(
            Point::new(content.x + LABEL_X, content.y + MESSAGE_Y),
            Size::new(snapshot.message_width, layout.message_height),
        );
        frame.with_clip(label, |frame| {
            frame.fill_text(Text {
                content: snapshot.message.clone(),
                position: label.position(),
                max_width: label.width,
                color: snapshot.message_color,
                size: snapshot.message_font.size().into(),
                line_height: LINE_HEIGHT,
                font: snapshot.message_font.to_iced(),
                ..Text::default()
            });
        });

        frame.fill(
            &Path::rounded_rectangle(
                Point::new(content.x + layout.grabber.x, content.y + layout.grabber.y),
                Size::new(GRABBER_WIDTH, GRABBER_HEIGHT),
                radius::GRABBER.into(),
            ),
            palette::GRABBER,
        );
    }

    fn draw_actions(frame: &mut Frame, snapshot: &Snapshot, pressed: Option<usize>) {
        if snapshot.actions.is_empty() {
            return;
        }
        let width = snapshot.layout.frame.width;
        let origin_y = snapshot.layout.strip_origin_y;

        // Strip background shows through the gaps between rows.
        frame.fill_rectangle(
            Point::new(0.0, origin_y),
            Size::new(width, strip_height(snapshot.actions.len())),
            palette::SEPARATOR,
        );

        for (index, action) in snapshot.actions.iter().enumerate() {
            let top = origin_y + ActionStrip::item_origin_y(index);
            frame.fill_rectangle(
                Point::new(0.0, top),
                Size::new(width, ACTION_HEIGHT),
                palette::WHITE,
            );

            frame.fill_text(Text {
                content: action.title.clone(),
                position: Point::new(width / 2.0, top + ACTION_HEIGHT / 2.0),
                align_x: Alignment::Center,
                align_y: Vertical::Center,
                color: if pressed == Some(index) {
                    action.highlighted_tint
                } else {
                    action.tint
                },
                size: action.font.size().into(),
                font: action.font.to_iced(),
                ..Text::default()
            });
        }
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

impl<Message> canvas::Program<Message> for BannerCanvas<Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let pointer = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if !self.claims(position) {
                    return None;
                }
                return Some(
                    Action::publish((self.on_pointer)(Pointer::Pressed(position))).and_capture(),
                );
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => Pointer::Left,
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                Pointer::Moved(cursor.position_in(bounds)?)
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                match cursor.position_in(bounds) {
                    Some(position) => Pointer::Released(position),
                    None => Pointer::Left,
                }
            }
            _ => return None,
        };

        // Only presses are captured so the content underneath stays usable.
        Some(Action::publish((self.on_pointer)(pointer)))
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let top = self.snapshots.len().saturating_sub(1);
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            if matches!(snapshot.phase, Phase::Hidden | Phase::Removed) {
                continue;
            }
            Self::draw_banner(&mut frame, bounds.size(), snapshot);
            let pressed = if index == top { self.pressed_action } else { None };
            Self::draw_actions(&mut frame, snapshot, pressed);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{ActionItem, Banner, HostWindow, PanEvent, Style};
    use std::time::{Duration, Instant};

    fn settled(expandable: bool) -> (Banner, HostWindow, Instant) {
        let mut window = HostWindow::new(Size::new(390.0, 844.0));
        let mut banner = Banner::new("Title", "A message", Style::Light, &window);
        banner.set_expandable(expandable).unwrap();
        let font = banner.action_font(None).unwrap();
        banner
            .add_action(ActionItem::new("Open", font, palette::ACTION_TINT, || {}))
            .unwrap();
        let start = Instant::now();
        banner.present(&mut window, start).unwrap();
        let settled = start + Duration::from_millis(500);
        banner.tick(&mut window, settled);
        (banner, window, settled)
    }

    fn canvas(banner: &Banner, now: Instant) -> BannerCanvas<()> {
        BannerCanvas::new(vec![banner.snapshot(now)], |_| ())
    }

    #[test]
    fn resting_banner_claims_only_its_frame() {
        let (banner, _window, now) = settled(false);
        let canvas = canvas(&banner, now);
        assert!(canvas.claims(Point::new(100.0, 50.0)));
        assert!(!canvas.claims(Point::new(100.0, 400.0)));
        // Strip parked below the screen.
        assert!(!canvas.claims(Point::new(100.0, 820.0)));
    }

    #[test]
    fn expanded_banner_claims_the_whole_screen() {
        let (mut banner, mut window, now) = settled(true);
        banner.pan(PanEvent::began(20.0, 500.0), &mut window, now);
        banner.pan(PanEvent::ended(0.0, 500.0), &mut window, now);
        assert!(banner.is_expanded());

        let canvas = canvas(&banner, now + Duration::from_secs(1));
        assert!(canvas.claims(Point::new(100.0, 400.0)));
    }

    #[test]
    fn removed_banners_claim_nothing() {
        let (mut banner, mut window, now) = settled(false);
        banner.select_action(0, &mut window, now).unwrap();
        banner.tick(&mut window, now + Duration::from_secs(1));
        assert_eq!(banner.phase(), Phase::Removed);

        let canvas = canvas(&banner, now + Duration::from_secs(1));
        assert!(!canvas.claims(Point::new(100.0, 50.0)));
    }
}
