// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! The inbox subscriptions live for the whole session. Frame updates and the
//! dialog keyboard bindings only exist while something needs them.

use super::Message;
use crate::ui::confirm::{self, ConfirmMessage};
use crate::ui::notifications::{self, NotificationMessage};
use iced::{window, Subscription};

/// Bridges the notification and confirmation inboxes into the update loop.
pub fn create_inbox_subscriptions() -> Subscription<Message> {
    Subscription::batch([
        notifications::subscription().map(Message::Notification),
        confirm::subscription().map(Message::Confirm),
    ])
}

/// Escape/Enter bindings, only while a dialog awaits a choice.
pub fn create_dialog_keyboard_subscription(dialog_open: bool) -> Subscription<Message> {
    if dialog_open {
        confirm::keyboard_subscription().map(Message::Confirm)
    } else {
        Subscription::none()
    }
}

/// Redraw-synchronized frames for toast countdowns and fades, only while a
/// toast is timed or closing.
pub fn create_toast_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        window::frames().map(|at| Message::Notification(NotificationMessage::Frame(at)))
    } else {
        Subscription::none()
    }
}

/// Redraw-synchronized frames for the dialog exit animation.
pub fn create_dialog_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        window::frames().map(|at| Message::Confirm(ConfirmMessage::Frame(at)))
    } else {
        Subscription::none()
    }
}
