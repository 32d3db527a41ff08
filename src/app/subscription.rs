// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Timers only exist while something needs them: the hold tick while the
//! clear control is held, the animation tick while the preview is fading.
//! Dropping the subscription is what stops the timer.

use super::{Message, Shortcut};
use crate::board::HoldToClear;
use crate::config::ANIMATION_FRAME_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Routes keyboard shortcuts that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => shortcut_for(&key),
            _ => None,
        }
        .map(Message::Shortcut)
    })
}

fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Named(Named::F1) => Some(Shortcut::Help),
        _ => None,
    }
}

/// Samples hold progress at the configured interval while holding.
pub fn create_hold_subscription(hold: &HoldToClear) -> Subscription<Message> {
    if hold.is_holding() {
        time::every(hold.interval().as_duration()).map(Message::HoldTick)
    } else {
        Subscription::none()
    }
}

/// Drives preview transitions.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}
