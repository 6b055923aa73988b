// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime and close animation
//! - **Dialog**: Confirmation dialog exit animation
//! - **Logging**: Default log level for the demo binary

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time-to-live of a notification (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: i64 = 5000;

/// Maximum accepted notification time-to-live (in milliseconds).
/// Longer values are clamped; use a non-positive value for persistent toasts.
pub const MAX_NOTIFICATION_DURATION_MS: i64 = 600_000;

/// Default duration of the toast close animation (in milliseconds).
pub const DEFAULT_CLOSE_ANIMATION_MS: u64 = 300;

/// Maximum close animation duration (in milliseconds).
pub const MAX_CLOSE_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Dialog Defaults
// ==========================================================================

/// Default duration of the confirmation dialog exit animation (in milliseconds).
pub const DEFAULT_DIALOG_EXIT_ANIMATION_MS: u64 = 200;

/// Maximum dialog exit animation duration (in milliseconds).
pub const MAX_DIALOG_EXIT_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default log level used when the config does not specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
