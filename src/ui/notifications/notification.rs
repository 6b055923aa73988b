// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use super::lifetime::Lifetime;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers come from a process-wide counter, so two notifications created
/// in the same tick still differ and an id is never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic category of a notification; drives glyph, color and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (orange).
    Warning,
    /// Neutral information (blue).
    Info,
}

impl Kind {
    /// Returns the primary color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the title shown when the producer does not supply one.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Error => "Error",
            Kind::Warning => "Warning",
            Kind::Info => "Information",
        }
    }

    /// Returns the glyph rendered in front of the title.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✔",
            Kind::Error => "✖",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
        }
    }
}

/// Lenient conversion used for kinds coming from config files or other
/// loosely typed sources. Unknown names fall back to `Success`.
impl From<&str> for Kind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" | "danger" => Kind::Error,
            "warning" | "warn" => Kind::Warning,
            "info" | "information" => Kind::Info,
            _ => Kind::Success,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// Title override; `None` uses the kind's default title.
    title: Option<String>,
    message: String,
    lifetime: Lifetime,
    /// When this notification was created; the countdown is anchored here.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the default five second lifetime.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: None,
            message: message.into(),
            lifetime: Lifetime::default(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Overrides the kind's default title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets how long the notification stays visible.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: impl Into<Lifetime>) -> Self {
        self.lifetime = lifetime.into();
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the displayed title: the override if any, else the kind default.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.kind.default_title())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Absolute deadline of the countdown.
    ///
    /// `None` for persistent notifications, and for lifetimes so long that
    /// the deadline is not representable; those never expire.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.lifetime
            .duration()
            .and_then(|duration| self.created_at.checked_add(duration))
    }

    /// Time left before expiry, recomputed from the absolute deadline.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Remaining share of the lifetime in `0.0..=1.0`, used for the progress bar.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        let remaining = self.remaining(now)?;
        let total = self.lifetime.duration()?;
        Some((remaining.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Returns whether the countdown has run out at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let kinds = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn default_titles_follow_kind() {
        assert_eq!(Notification::success("m").title(), "Success");
        assert_eq!(Notification::error("m").title(), "Error");
        assert_eq!(Notification::warning("m").title(), "Warning");
        assert_eq!(Notification::info("m").title(), "Information");
    }

    #[test]
    fn title_override_replaces_default() {
        let notification = Notification::success("Saved").with_title("Great");
        assert_eq!(notification.title(), "Great");
        assert_eq!(notification.message(), "Saved");
    }

    #[test]
    fn unknown_kind_name_falls_back_to_success() {
        assert_eq!(Kind::from("error"), Kind::Error);
        assert_eq!(Kind::from(" Warning "), Kind::Warning);
        assert_eq!(Kind::from("info"), Kind::Info);
        assert_eq!(Kind::from("celebration"), Kind::Success);
        assert_eq!(Kind::from(""), Kind::Success);
    }

    #[test]
    fn remaining_fraction_counts_down_from_one() {
        let notification = Notification::info("tick").with_lifetime(Lifetime::from_millis(1000));
        let start = notification.created_at();

        let full = notification.remaining_fraction(start).unwrap();
        let half = notification
            .remaining_fraction(start + Duration::from_millis(500))
            .unwrap();
        let done = notification
            .remaining_fraction(start + Duration::from_millis(1500))
            .unwrap();

        assert_abs_diff_eq!(full, 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(half, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(done, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn persistent_notification_has_no_deadline() {
        let notification = Notification::success("Saved").with_lifetime(Lifetime::Persistent);
        let far_future = notification.created_at() + Duration::from_secs(3600);

        assert!(notification.expires_at().is_none());
        assert!(notification.remaining_fraction(far_future).is_none());
        assert!(!notification.is_expired(far_future));
    }

    #[test]
    fn expiry_is_anchored_at_creation() {
        let notification = Notification::error("Save failed");
        let start = notification.created_at();

        assert!(!notification.is_expired(start + Duration::from_millis(4999)));
        assert!(notification.is_expired(start + Duration::from_millis(5000)));
    }

    #[test]
    fn unrepresentable_deadline_never_expires() {
        let notification = Notification::info("long").with_lifetime(Duration::MAX);
        let start = notification.created_at();

        assert!(!notification.lifetime().is_persistent());
        assert!(notification.expires_at().is_none());
        assert!(notification.remaining(start).is_none());
        assert!(notification.remaining_fraction(start).is_none());
        assert!(!notification.is_expired(start + Duration::from_secs(86_400)));
    }
}
