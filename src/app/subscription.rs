// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Left/Right arrow keys drive the gallery when keyboard navigation is on.
//! F12 toggles the session log at any time.

use super::Message;
use crate::ui::detail_view;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard subscriptions. Arrow keys are only listened to when
/// gallery navigation is enabled.
pub fn create_event_subscription(keyboard_navigation: bool) -> Subscription<Message> {
    let diagnostics = event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                toggle_message(&key)
            }
            _ => None,
        }
    });

    if !keyboard_navigation {
        return diagnostics;
    }

    let navigation = event::listen_with(|event, status, _window_id| {
        // Keys already consumed by a focused widget stay there.
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_message(&key)
            }
            _ => None,
        }
    });

    Subscription::batch([navigation, diagnostics])
}

fn key_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(Message::Detail(detail_view::Message::Next))
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            Some(Message::Detail(detail_view::Message::Previous))
        }
        _ => None,
    }
}

fn toggle_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::F12) => Some(Message::ToggleDiagnostics),
        _ => None,
    }
}
