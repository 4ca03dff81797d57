// SPDX-License-Identifier: MPL-2.0
//! Action buttons shown in the strip beneath an expanded banner.

use super::font::FontRef;
use crate::ui::design_tokens::opacity;
use iced::Color;
use std::fmt;

/// Zero-argument callback run when the host reacts to the banner.
pub type Callback = Box<dyn FnMut() + Send>;

/// Receives a notice when any action button is activated.
///
/// The banner implements this to dismiss itself before the action's own
/// handler runs.
pub trait ActionDelegate {
    fn action_selected(&mut self);
}

/// A tappable row in the action strip.
pub struct ActionItem {
    title: String,
    font: FontRef,
    tint: Color,
    handler: Callback,
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("title", &self.title)
            .field("font", &self.font)
            .field("tint", &self.tint)
            .finish_non_exhaustive()
    }
}

impl ActionItem {
    pub fn new(
        title: impl Into<String>,
        font: FontRef,
        tint: Color,
        handler: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            font,
            tint,
            handler: Box::new(handler),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn font(&self) -> FontRef {
        self.font
    }

    #[must_use]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Title color while the button is pressed.
    #[must_use]
    pub fn highlighted_tint(&self) -> Color {
        Color {
            a: self.tint.a * opacity::HIGHLIGHTED,
            ..self.tint
        }
    }

    /// Notifies the delegate, then runs the handler.
    pub fn activate(&mut self, delegate: Option<&mut dyn ActionDelegate>) {
        if let Some(delegate) = delegate {
            delegate.action_selected();
        }
        (self.handler)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<&'static str>>>);

    impl ActionDelegate for Recorder {
        fn action_selected(&mut self) {
            self.0.lock().unwrap().push("delegate");
        }
    }

    #[test]
    fn activate_notifies_delegate_before_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler_log = Arc::clone(&log);
        let mut item = ActionItem::new(
            "Reply",
            FontRef::system(16.0),
            Color::BLACK,
            move || handler_log.lock().unwrap().push("handler"),
        );
        let mut delegate = Recorder(Arc::clone(&log));

        item.activate(Some(&mut delegate));

        assert_eq!(*log.lock().unwrap(), vec!["delegate", "handler"]);
    }

    #[test]
    fn activate_without_delegate_runs_handler() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let mut item = ActionItem::new("Open", FontRef::system(16.0), Color::BLACK, move || {
            *counter.lock().unwrap() += 1;
        });

        item.activate(None);
        item.activate(None);

        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn highlighted_tint_halves_alpha() {
        let item = ActionItem::new("Open", FontRef::system(16.0), Color::WHITE, || {});
        assert_eq!(item.highlighted_tint().a, 0.5);
        assert_eq!(item.tint(), Color::WHITE);
    }
}
