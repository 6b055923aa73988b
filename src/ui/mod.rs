// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Both feedback surfaces follow the Elm-style "state down, messages up"
//! pattern: the application owns a state holder, forwards its messages and
//! renders it as an overlay above the current page.
//!
//! # Feedback surfaces
//!
//! - [`notifications`] - Toast notification queue with per-toast countdowns
//! - [`confirm`] - Awaitable modal confirmation dialogs
//!
//! # Shared Infrastructure
//!
//! - [`bus`] - Process-wide registration of a producer handle and its inbox
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod bus;
pub mod confirm;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
