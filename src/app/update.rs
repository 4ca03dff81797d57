// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo application.

use super::message::Notice;
use super::samples::SAMPLES;
use crate::banner::{ActionItem, Banner, HostWindow, TapTarget};
use crate::config::Config;
use crate::error::Result;
use crate::gesture::{Gesture, PanRecognizer};
use crate::ui::banner_canvas::Pointer;
use crate::ui::design_tokens::palette;
use iced::widget::image;
use std::sync::mpsc;
use std::time::Instant;

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub window: &'a mut HostWindow,
    pub config: &'a Config,
    pub banners: &'a mut Vec<Banner>,
    pub recognizer: &'a mut PanRecognizer,
    pub pressed_action: &'a mut Option<usize>,
    pub notice_tx: &'a mpsc::Sender<Notice>,
}

/// Builds the banner for a sample, wiring its callbacks to the notice channel.
fn build_banner(
    index: usize,
    window: &HostWindow,
    config: &Config,
    notice_tx: &mpsc::Sender<Notice>,
) -> Result<Option<Banner>> {
    let Some(sample) = SAMPLES.get(index) else {
        return Ok(None);
    };

    let mut banner = Banner::from_config(sample.title, sample.message, &config.banner, window);

    if sample.image {
        // Single gray pixel; rendered as the round placeholder.
        banner.set_image(image::Handle::from_rgba(1, 1, vec![85, 85, 85, 255]))?;
    }

    for (row, title) in sample.actions.iter().enumerate() {
        let tx = notice_tx.clone();
        let banner_title = sample.title.to_string();
        let action = title.to_string();
        let tint = if row + 1 == sample.actions.len() && sample.actions.len() > 2 {
            palette::ACTION_DESTRUCTIVE
        } else {
            palette::ACTION_TINT
        };
        let font = banner.action_font(None)?;
        banner.add_action(ActionItem::new(*title, font, tint, move || {
            let _ = tx.send(Notice::Action {
                banner: banner_title.clone(),
                action: action.clone(),
            });
        }))?;
    }

    let tx = notice_tx.clone();
    let title = sample.title.to_string();
    banner.on_tap(move || {
        let _ = tx.send(Notice::Tapped(title.clone()));
    });

    let tx = notice_tx.clone();
    let title = sample.title.to_string();
    banner.on_dismiss(move || {
        let _ = tx.send(Notice::Dismissed(title.clone()));
    });

    Ok(Some(banner))
}

pub fn handle_present(ctx: &mut UpdateContext<'_>, index: usize) {
    let now = Instant::now();
    let banner = match build_banner(index, ctx.window, ctx.config, ctx.notice_tx) {
        Ok(Some(banner)) => banner,
        Ok(None) => return,
        Err(err) => {
            tracing::warn!(%err, index, "could not build sample banner");
            return;
        }
    };

    ctx.banners.push(banner);
    if let Some(banner) = ctx.banners.last_mut() {
        if let Err(err) = banner.present(ctx.window, now) {
            tracing::warn!(%err, "present failed");
        }
    }
}

pub fn handle_pointer(ctx: &mut UpdateContext<'_>, pointer: Pointer) {
    let now = Instant::now();
    let Some(banner) = ctx.banners.last_mut() else {
        ctx.recognizer.cancel();
        return;
    };

    match pointer {
        Pointer::Pressed(position) => {
            let origin_y = banner.layout(now).strip_origin_y;
            *ctx.pressed_action = if banner.is_expanded() {
                banner.strip().hit_test(position.y, origin_y)
            } else {
                None
            };
            if ctx.pressed_action.is_none() {
                ctx.recognizer.press(position, now);
            }
        }
        Pointer::Moved(position) => {
            if let Some(Gesture::Pan(pan)) = ctx.recognizer.moved(position, now) {
                banner.pan(pan, ctx.window, now);
            }
        }
        Pointer::Released(position) => {
            if let Some(pressed) = ctx.pressed_action.take() {
                let origin_y = banner.layout(now).strip_origin_y;
                if banner.strip().hit_test(position.y, origin_y) == Some(pressed) {
                    if let Err(err) = banner.select_action(pressed, ctx.window, now) {
                        tracing::warn!(%err, "action selection failed");
                    }
                }
                return;
            }

            match ctx.recognizer.release(position, now) {
                Some(Gesture::Tap(point)) => {
                    if banner.layout(now).frame.contains(point) {
                        banner.tap(TapTarget::Banner, ctx.window, now);
                        return;
                    }
                    // Outside the top banner: the topmost shown overlay owns the tap.
                    if let Some(owner) = ctx
                        .banners
                        .iter_mut()
                        .rev()
                        .find(|banner| banner.is_overlay_visible())
                    {
                        owner.tap(TapTarget::Overlay, ctx.window, now);
                    }
                }
                Some(Gesture::Pan(pan)) => banner.pan(pan, ctx.window, now),
                None => {}
            }
        }
        Pointer::Left => {
            *ctx.pressed_action = None;
            if let Some(Gesture::Pan(pan)) = ctx.recognizer.cancel() {
                banner.pan(pan, ctx.window, now);
            }
        }
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    let window = &mut *ctx.window;
    ctx.banners.retain_mut(|banner| banner.tick(&mut *window, now));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{PanEvent, Phase};
    use iced::{Point, Size};

    fn window() -> HostWindow {
        HostWindow::new(Size::new(390.0, 844.0))
    }

    #[test]
    fn samples_build_with_their_actions() {
        let (tx, _rx) = mpsc::channel();
        let config = Config::default();
        for (index, sample) in SAMPLES.iter().enumerate() {
            let banner = build_banner(index, &window(), &config, &tx)
                .unwrap()
                .unwrap();
            assert_eq!(banner.strip().len(), sample.actions.len());
            assert_eq!(banner.phase(), Phase::Hidden);
        }
    }

    #[test]
    fn unknown_sample_builds_nothing() {
        let (tx, _rx) = mpsc::channel();
        assert!(build_banner(99, &window(), &Config::default(), &tx)
            .unwrap()
            .is_none());
    }

    #[test]
    fn dismiss_callback_reaches_the_channel() {
        let (tx, rx) = mpsc::channel();
        let mut window = window();
        let config = Config::default();
        let mut banner = build_banner(2, &window, &config, &tx).unwrap().unwrap();

        let start = Instant::now();
        banner.present(&mut window, start).unwrap();
        banner.tap(TapTarget::Banner, &mut window, start);
        banner.select_action(0, &mut window, start).unwrap();
        assert!(!banner.tick(&mut window, start + std::time::Duration::from_secs(1)));

        let notices: Vec<Notice> = rx.try_iter().collect();
        assert_eq!(
            notices,
            vec![
                Notice::Tapped("Calendar".into()),
                Notice::Action {
                    banner: "Calendar".into(),
                    action: "Snooze".into(),
                },
                Notice::Dismissed("Calendar".into()),
            ]
        );
    }

    #[test]
    fn overlay_tap_reaches_the_expanded_banner_under_a_newer_one() {
        let (tx, _rx) = mpsc::channel();
        let mut window = window();
        let mut config = Config::default();
        config.banner.expandable = Some(true);
        let mut recognizer = PanRecognizer::new();
        let mut pressed_action = None;
        let mut banners = Vec::new();

        let start = Instant::now();
        let mut expanded = build_banner(1, &window, &config, &tx).unwrap().unwrap();
        expanded.present(&mut window, start).unwrap();
        let settled = start + std::time::Duration::from_millis(500);
        expanded.tick(&mut window, settled);
        expanded.pan(PanEvent::began(20.0, 800.0), &mut window, settled);
        expanded.pan(PanEvent::ended(5.0, 800.0), &mut window, settled);
        assert!(expanded.is_overlay_visible());
        banners.push(expanded);

        let mut ctx = UpdateContext {
            window: &mut window,
            config: &config,
            banners: &mut banners,
            recognizer: &mut recognizer,
            pressed_action: &mut pressed_action,
            notice_tx: &tx,
        };
        handle_present(&mut ctx, 3);
        handle_pointer(&mut ctx, Pointer::Pressed(Point::new(100.0, 400.0)));
        handle_pointer(&mut ctx, Pointer::Released(Point::new(100.0, 400.0)));

        assert_eq!(banners[0].phase(), Phase::Dismissing);
        assert_eq!(banners[1].phase(), Phase::Presenting);
    }
}
