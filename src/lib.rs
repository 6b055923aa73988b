// SPDX-License-Identifier: MPL-2.0
//! `dashboard_feedback` provides the user-feedback layer of the institute
//! admin dashboard, built with the Iced GUI framework.
//!
//! Two utilities are reachable from anywhere in the process once installed:
//! typed toast notifications ([`ui::notifications`]) and awaitable
//! confirmation dialogs ([`ui::confirm`]). The [`app`] module wires both
//! into a small course management page.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
