// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Forwards window resizes so the host bounds follow the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Ticks while at least one banner is on screen.
pub fn create_tick_subscription(has_banners: bool) -> Subscription<Message> {
    if has_banners {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
