// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification queue following
//! toast/snackbar UX patterns. CRUD pages (and non-UI code such as API
//! wrappers) raise typed notifications after a request succeeds or fails;
//! the queue stacks them in a screen corner and removes each one after its
//! own countdown.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its `Kind`
//! - [`lifetime`] - Timed or persistent display duration
//! - [`manager`] - `Manager` owning the queue and the per-entry lifecycle
//! - [`service`] - Process-wide `Notifier` registration and free functions
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use dashboard_feedback::ui::notifications::{self, Lifetime, Manager, Notification};
//!
//! // At startup, next to the manager owned by the application
//! let notifier = notifications::install(Lifetime::default());
//! let mut manager = Manager::new();
//!
//! // Anywhere else
//! notifications::notify_error("Save failed");
//! notifications::show(Notification::success("Saved").with_title("Great"));
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&manager, Position::BottomRight, now).map(Message::Notification);
//! ```

mod lifetime;
mod manager;
mod notification;
mod service;
mod toast;

pub use lifetime::Lifetime;
pub use manager::{Entry, Manager, Message as NotificationMessage, Phase};
pub use notification::{Kind, Notification, NotificationId};
pub use service::{
    dismiss, install, notifier, notify, notify_error, notify_info, notify_success,
    notify_warning, show, subscription, take_inbox, uninstall, Command, Inbox, Notifier,
};
pub use toast::{Position, Toast};
