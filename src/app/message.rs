// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::courses::CourseId;
use crate::ui::confirm::ConfirmMessage;
use crate::ui::notifications::NotificationMessage;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    Confirm(ConfirmMessage),
    /// Delete button of a course row.
    DeleteCourse(CourseId),
    DeleteConfirmed(CourseId, bool),
    /// Publish/unpublish button of a course row.
    UpdateCourse(CourseId),
    UpdateConfirmed(CourseId, bool),
    /// Simulates a failed API call.
    SimulateFailure,
    /// Raises a persistent warning that stays until closed.
    RaiseWarning,
    /// Notifies from a worker thread, outside the UI loop.
    SyncCatalog,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional directory overriding where `settings.toml` is read.
    pub config_dir: Option<PathBuf>,
    /// Theme forced on the command line, overriding the config file.
    pub theme: Option<ThemeMode>,
}
