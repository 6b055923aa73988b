// SPDX-License-Identifier: MPL-2.0
//! Awaitable confirmation dialogs.
//!
//! Imperative code (form handlers, table row actions, API wrappers) asks the
//! user a yes/no question and gets the answer back as a future:
//!
//! ```ignore
//! use dashboard_feedback::ui::confirm;
//!
//! if confirm::confirm_delete("Welding 101", Some("course")).await {
//!     api.delete_course(id).await?;
//! }
//! ```
//!
//! # Components
//!
//! - [`options`] - `ConfirmOptions` builder and the delete/update presets
//! - [`controller`] - `Controller` state machine owning the dialog slot
//! - [`service`] - Process-wide `Confirmer` registration and async helpers
//! - [`dialog`] - Modal rendering (backdrop, card, buttons)
//!
//! Only one dialog is on screen at a time. Requests made while one is open
//! wait in arrival order and open once the current dialog has animated out.

mod controller;
mod dialog;
mod options;
mod service;

pub use controller::{
    Choice, Controller, Message as ConfirmMessage, Phase, Request, RequestId, Responder,
};
pub use dialog::Dialog;
pub use options::{
    ConfirmOptions, Variant, DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT, DEFAULT_ITEM_TYPE,
    DEFAULT_MESSAGE, DEFAULT_TITLE,
};
pub use service::{
    close, confirm, confirm_delete, confirm_update, confirmer, install, key_message,
    keyboard_subscription, subscription, take_inbox, uninstall, Command, Confirmer, Inbox,
};
