// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and log level
//! - `[notifications]` - Toast lifetime, close animation and screen corner
//! - `[dialog]` - Confirmation dialog exit animation
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `DASHBOARD_FEEDBACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dashboard_feedback::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.notifications.default_duration_ms = Some(8000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::{Lifetime, Position};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "DashboardFeedback";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DASHBOARD_FEEDBACK_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Log level for the demo binary (error, warn, info, debug, trace).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl GeneralConfig {
    /// Parses `log_level`, falling back to the default on unknown names.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .or_else(|| DEFAULT_LOG_LEVEL.parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Default time-to-live in milliseconds; zero or negative keeps toasts
    /// until they are dismissed.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<i64>,

    /// Close animation length in milliseconds.
    #[serde(
        default = "default_close_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_animation_ms: Option<u64>,

    /// Screen corner where toasts are stacked.
    #[serde(default)]
    pub position: Position,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            close_animation_ms: default_close_animation_ms(),
            position: Position::default(),
        }
    }
}

impl NotificationsConfig {
    /// Returns the configured default lifetime, clamped to the accepted range.
    #[must_use]
    pub fn default_lifetime(&self) -> Lifetime {
        let millis = self
            .default_duration_ms
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS)
            .min(MAX_NOTIFICATION_DURATION_MS);
        Lifetime::from_millis(millis)
    }

    /// Returns the configured close animation, clamped to the accepted range.
    #[must_use]
    pub fn close_animation(&self) -> Duration {
        let millis = self
            .close_animation_ms
            .unwrap_or(DEFAULT_CLOSE_ANIMATION_MS)
            .min(MAX_CLOSE_ANIMATION_MS);
        Duration::from_millis(millis)
    }
}

/// Confirmation dialog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogConfig {
    /// Exit animation length in milliseconds.
    #[serde(
        default = "default_exit_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_animation_ms: Option<u64>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            exit_animation_ms: default_exit_animation_ms(),
        }
    }
}

impl DialogConfig {
    /// Returns the configured exit animation, clamped to the accepted range.
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        let millis = self
            .exit_animation_ms
            .unwrap_or(DEFAULT_DIALOG_EXIT_ANIMATION_MS)
            .min(MAX_DIALOG_EXIT_ANIMATION_MS);
        Duration::from_millis(millis)
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
}

fn default_duration_ms() -> Option<i64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_close_animation_ms() -> Option<u64> {
    Some(DEFAULT_CLOSE_ANIMATION_MS)
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_DIALOG_EXIT_ANIMATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// Resolution order: explicit override, `DASHBOARD_FEEDBACK_CONFIG_DIR`,
/// then the platform config directory with the app name appended.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple with the config and an optional warning message when the
/// file existed but could not be parsed (defaults are used in that case).
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// Nothing is logged here; the caller reports the warning once the logger
/// is up.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Settings could not be loaded from {}: {error}",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
