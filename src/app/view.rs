// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The sample list fills the window; the banner canvas is stacked on top of
//! it while any banner is on screen.

use super::message::{Message, Notice};
use super::samples::SAMPLES;
use super::App;
use crate::banner::Banner;
use crate::ui::banner_canvas::BannerCanvas;
use crate::ui::design_tokens::typography;
use iced::widget::{button, canvas, column, stack, text, Column, Container};
use iced::{Element, Length};
use std::time::Instant;

const PADDING: f32 = 16.0;
const SPACING: f32 = 8.0;

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let content = view_samples(&self.notices, self.config_warning.as_deref());

        if self.banners.is_empty() {
            return content;
        }

        stack![
            content,
            view_banners(&self.banners, self.pressed_action, Instant::now())
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

fn view_samples<'a>(notices: &'a [Notice], warning: Option<&'a str>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(SPACING);

    for (index, sample) in SAMPLES.iter().enumerate() {
        let label = if sample.actions.is_empty() {
            sample.title.to_string()
        } else {
            format!("{} ({} actions)", sample.title, sample.actions.len())
        };
        list = list.push(
            button(text(label))
                .width(Length::Fill)
                .on_press(Message::Present(index)),
        );
    }

    let mut history = Column::new().spacing(SPACING / 2.0);
    for notice in notices.iter().rev() {
        history = history.push(text(notice.to_string()).size(typography::CAPTION));
    }

    let mut body = column![list, history].spacing(PADDING);
    if let Some(warning) = warning {
        body = body.push(text(format!("Settings: {warning}")).size(typography::CAPTION));
    }

    Container::new(body)
        .padding(PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_banners(
    banners: &[Banner],
    pressed_action: Option<usize>,
    now: Instant,
) -> Element<'static, Message> {
    let snapshots = banners.iter().map(|banner| banner.snapshot(now)).collect();
    canvas(BannerCanvas::new(snapshots, Message::Pointer).pressed_action(pressed_action))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
