// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses are translated into [`KeyAction`]s here; the update loop
//! decides which component receives them depending on whether the detail
//! overlay is open.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Event, Subscription};

/// Keyboard shortcuts understood by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Escape.
    Cancel,
    /// Enter or Space.
    Confirm,
    FocusNext,
    FocusPrevious,
    FocusDown,
    FocusUp,
}

/// Maps a key press to an action, if it has one.
#[must_use]
pub fn key_action(key: &Key, modifiers: Modifiers) -> Option<KeyAction> {
    match key {
        Key::Named(Named::Escape) => Some(KeyAction::Cancel),
        Key::Named(Named::Enter | Named::Space) => Some(KeyAction::Confirm),
        Key::Named(Named::Tab) if modifiers.shift() => Some(KeyAction::FocusPrevious),
        Key::Named(Named::Tab) | Key::Named(Named::ArrowRight) => Some(KeyAction::FocusNext),
        Key::Named(Named::ArrowLeft) => Some(KeyAction::FocusPrevious),
        Key::Named(Named::ArrowDown) => Some(KeyAction::FocusDown),
        Key::Named(Named::ArrowUp) => Some(KeyAction::FocusUp),
        _ => None,
    }
}

/// Creates the keyboard subscription.
///
/// Escape is always delivered so the overlay can be dismissed whatever has
/// focus; the other keys only when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
            return None;
        };

        match key_action(&key, modifiers)? {
            KeyAction::Cancel => Some(Message::Keyboard(KeyAction::Cancel)),
            action if status == event::Status::Ignored => Some(Message::Keyboard(action)),
            _ => None,
        }
    })
}
