// SPDX-License-Identifier: MPL-2.0
//! Canned notifications offered by the demo.

/// One demo notification.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub title: &'static str,
    pub message: &'static str,
    pub actions: &'static [&'static str],
    pub image: bool,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "New Message",
        message: "Are we still on for lunch tomorrow?",
        actions: &[],
        image: true,
    },
    Sample {
        title: "Build failed",
        message: "The nightly pipeline failed in the integration stage. Three \
                  tests timed out while waiting for the staging database, and the \
                  release job was skipped. Pull down to see what you can do next.",
        actions: &["Retry", "View Logs", "Ignore"],
        image: false,
    },
    Sample {
        title: "Calendar",
        message: "Design review starts in 10 minutes in room 4B.\nBring the updated mockups.",
        actions: &["Snooze", "Join"],
        image: true,
    },
    Sample {
        title: "Low Battery",
        message: "10% battery remaining",
        actions: &[],
        image: false,
    },
];
