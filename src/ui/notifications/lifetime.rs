// SPDX-License-Identifier: MPL-2.0
//! Notification time-to-live.
//!
//! A notification either counts down for a fixed duration or stays on screen
//! until it is dismissed.

use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use std::time::Duration;

/// How long a notification stays visible before it starts closing.
///
/// # Example
///
/// ```
/// use dashboard_feedback::ui::notifications::Lifetime;
/// use std::time::Duration;
///
/// assert_eq!(Lifetime::from_millis(1500), Lifetime::Timed(Duration::from_millis(1500)));
///
/// // Zero or negative values keep the toast until it is dismissed
/// assert_eq!(Lifetime::from_millis(0), Lifetime::Persistent);
/// assert_eq!(Lifetime::from_millis(-20), Lifetime::Persistent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// Auto-dismiss once the duration has elapsed.
    Timed(Duration),
    /// Stay visible until dismissed manually.
    Persistent,
}

impl Lifetime {
    /// Builds a lifetime from a millisecond count; `<= 0` means persistent.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(0) | Err(_) => Lifetime::Persistent,
            Ok(millis) => Lifetime::Timed(Duration::from_millis(millis)),
        }
    }

    /// Returns the countdown duration, or `None` for persistent notifications.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Lifetime::Timed(duration) if !duration.is_zero() => Some(duration),
            Lifetime::Timed(_) | Lifetime::Persistent => None,
        }
    }

    /// Returns true if the notification never auto-dismisses.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.duration().is_none()
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)
    }
}

impl From<Duration> for Lifetime {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Lifetime::Persistent
        } else {
            Lifetime::Timed(duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(
            Lifetime::default(),
            Lifetime::Timed(Duration::from_millis(5000))
        );
    }

    #[test]
    fn non_positive_millis_are_persistent() {
        assert!(Lifetime::from_millis(0).is_persistent());
        assert!(Lifetime::from_millis(-1).is_persistent());
        assert!(Lifetime::from_millis(i64::MIN).is_persistent());
    }

    #[test]
    fn zero_duration_conversion_is_persistent() {
        assert_eq!(Lifetime::from(Duration::ZERO), Lifetime::Persistent);
        assert_eq!(Lifetime::Timed(Duration::ZERO).duration(), None);
    }

    #[test]
    fn positive_millis_count_down() {
        let lifetime = Lifetime::from_millis(1000);
        assert_eq!(lifetime.duration(), Some(Duration::from_secs(1)));
        assert!(!lifetime.is_persistent());
    }
}
