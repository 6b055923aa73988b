// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered queue of toasts. Each entry moves through
//! `Active` (optionally counting down) and `Closing` (exit animation) before
//! it is removed. Timers are per entry: every frame the remaining time is
//! recomputed from each notification's absolute deadline, so expiring or
//! removing one toast never shifts another's countdown.

use super::notification::{Kind, Notification, NotificationId};
use super::service::Command;
use crate::config::DEFAULT_CLOSE_ANIMATION_MS;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user clicked the close control of a toast.
    Close(NotificationId),
    /// Animation frame; carries the frame's monotonic timestamp.
    Frame(Instant),
    /// A command forwarded from a [`Notifier`](super::Notifier).
    Inbox(Command),
}

/// Display phase of a queued notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Visible; counting down if the notification is timed.
    Active,
    /// Exit animation running since the given instant.
    Closing { since: Instant },
}

/// A notification together with its display phase.
#[derive(Debug, Clone)]
pub struct Entry {
    notification: Notification,
    phase: Phase,
}

impl Entry {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    /// Remaining share of the countdown; drops to zero once closing starts.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        let fraction = self.notification.remaining_fraction(now)?;
        Some(if self.is_closing() { 0.0 } else { fraction })
    }

    /// Progress of the exit animation in `0.0..=1.0` (0 while active).
    #[must_use]
    pub fn closing_progress(&self, now: Instant, animation: Duration) -> f32 {
        match self.phase {
            Phase::Active => 0.0,
            Phase::Closing { .. } if animation.is_zero() => 1.0,
            Phase::Closing { since } => {
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f32() / animation.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

/// Manages the ordered notification queue.
#[derive(Debug)]
pub struct Manager {
    /// Queued notifications in insertion (= display) order.
    entries: VecDeque<Entry>,
    /// How long a toast stays in the `Closing` phase before removal.
    close_animation: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            close_animation: Duration::from_millis(DEFAULT_CLOSE_ANIMATION_MS),
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exit animation length used before a closed toast is removed.
    #[must_use]
    pub fn with_close_animation(mut self, close_animation: Duration) -> Self {
        self.close_animation = close_animation;
        self
    }

    #[must_use]
    pub fn close_animation(&self) -> Duration {
        self.close_animation
    }

    /// Appends a notification at the end of the queue and returns its id.
    ///
    /// Warnings and errors are mirrored to the log.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        match notification.kind() {
            Kind::Error => log::error!("{}: {}", notification.title(), notification.message()),
            Kind::Warning => log::warn!("{}: {}", notification.title(), notification.message()),
            Kind::Success | Kind::Info => {
                log::debug!("notification {:?} queued: {}", id, notification.message());
            }
        }

        self.entries.push_back(Entry {
            notification,
            phase: Phase::Active,
        });
        id
    }

    /// Removes a notification immediately, skipping the exit animation.
    ///
    /// Returns `true` if the notification was found and removed. Unknown or
    /// already removed ids are a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.position(id) {
            self.entries.remove(pos);
            log::debug!("notification {:?} dismissed", id);
            return true;
        }
        false
    }

    /// Starts the exit animation of a notification (manual close).
    ///
    /// Returns `false` if the id is unknown or the toast is already closing.
    pub fn close(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.entries.iter_mut().find(|e| e.notification.id() == id) {
            Some(entry) if !entry.is_closing() => {
                entry.phase = Phase::Closing { since: now };
                true
            }
            _ => false,
        }
    }

    /// Advances every entry to `now`.
    ///
    /// Expired entries start closing, and entries whose exit animation has
    /// finished are removed. Returns the ids removed by this tick, in queue
    /// order.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        for entry in &mut self.entries {
            if entry.phase == Phase::Active && entry.notification.is_expired(now) {
                log::debug!("notification {:?} expired", entry.notification.id());
                entry.phase = Phase::Closing { since: now };
            }
        }

        let close_animation = self.close_animation;
        let mut removed = Vec::new();
        self.entries.retain(|entry| match entry.phase {
            Phase::Closing { since } if now.saturating_duration_since(since) >= close_animation => {
                removed.push(entry.notification.id());
                false
            }
            _ => true,
        });
        removed
    }

    /// Applies a command received from a notifier.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Show(notification) => {
                self.push(notification);
            }
            Command::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Close(id) => {
                self.close(id, Instant::now());
            }
            Message::Frame(now) => {
                self.tick(now);
            }
            Message::Inbox(command) => self.apply(command),
        }
    }

    /// Returns the queued entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Returns the queued ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.entries.iter().map(|e| e.notification.id()).collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.notification.id() == id)
    }

    /// Remaining share of a notification's countdown; `None` when the id is
    /// not queued or the notification is persistent.
    #[must_use]
    pub fn remaining_fraction(&self, id: NotificationId, now: Instant) -> Option<f32> {
        self.get(id)?.remaining_fraction(now)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether any entry needs per-frame updates (countdown or exit
    /// animation). Persistent toasts at rest do not.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.is_closing() || e.notification.expires_at().is_some())
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries.iter().position(|e| e.notification.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Lifetime;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.needs_frames());
        assert_eq!(manager.close_animation(), ms(300));
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::success("a"));
        let b = manager.push(Notification::error("b"));
        let c = manager.push(Notification::info("c"));

        assert_eq!(manager.ids(), vec![a, b, c]);
    }

    #[test]
    fn dismiss_keeps_relative_order_of_others() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::success("a"));
        let b = manager.push(Notification::success("b"));
        let c = manager.push(Notification::success("c"));

        assert!(manager.dismiss(b));
        assert_eq!(manager.ids(), vec![a, c]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("a"));
        let other = manager.push(Notification::success("b"));

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert!(!manager.dismiss(NotificationId::new()));
        assert_eq!(manager.ids(), vec![other]);
    }

    #[test]
    fn expiry_goes_through_closing_before_removal() {
        let mut manager = Manager::new();
        let notification = Notification::error("Save failed");
        let start = notification.created_at();
        let id = manager.push(notification);

        assert!(manager.tick(start + ms(4999)).is_empty());
        assert!(!manager.get(id).unwrap().is_closing());

        assert!(manager.tick(start + ms(5000)).is_empty());
        assert!(manager.get(id).unwrap().is_closing());

        assert!(manager.tick(start + ms(5299)).is_empty());
        assert_eq!(manager.tick(start + ms(5300)), vec![id]);
        assert!(manager.is_empty());
    }

    #[test]
    fn timers_are_independent() {
        let mut manager = Manager::new();
        let short = Notification::info("short").with_lifetime(Lifetime::from_millis(1000));
        let start = short.created_at();
        let short_id = manager.push(short);
        let long_id = manager.push(Notification::info("long").with_lifetime(Lifetime::from_millis(5000)));

        // Churn in between: add and remove unrelated toasts
        let noise = manager.push(Notification::warning("noise"));
        manager.dismiss(noise);

        manager.tick(start + ms(1000));
        let removed = manager.tick(start + ms(1300));
        assert_eq!(removed, vec![short_id]);
        assert!(manager.get(long_id).is_some());
        assert!(!manager.get(long_id).unwrap().is_closing());

        manager.tick(start + ms(5100));
        assert!(manager.get(long_id).unwrap().is_closing());
        manager.tick(start + ms(5400));
        assert!(manager.is_empty());
    }

    #[test]
    fn persistent_notifications_never_auto_close() {
        let mut manager = Manager::new();
        let notification = Notification::success("Saved")
            .with_title("Great")
            .with_lifetime(Lifetime::from_millis(0));
        let start = notification.created_at();
        let id = manager.push(notification);

        manager.tick(start + Duration::from_secs(3600));
        let entry = manager.get(id).expect("persistent toast should stay");
        assert!(!entry.is_closing());
        assert_eq!(entry.notification().title(), "Great");
        assert!(manager.remaining_fraction(id, start).is_none());
        assert!(!manager.needs_frames());

        assert!(manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn manual_close_short_circuits_the_timer() {
        let mut manager = Manager::new();
        let notification = Notification::warning("Heads up");
        let start = notification.created_at();
        let id = manager.push(notification);

        assert!(manager.close(id, start + ms(100)));
        assert!(!manager.close(id, start + ms(150)), "already closing");
        assert_eq!(manager.remaining_fraction(id, start + ms(150)), Some(0.0));

        assert_eq!(manager.tick(start + ms(400)), vec![id]);
    }

    #[test]
    fn remaining_fraction_is_non_increasing() {
        let mut manager = Manager::new();
        let notification = Notification::info("count").with_lifetime(Lifetime::from_millis(1000));
        let start = notification.created_at();
        let id = manager.push(notification);

        let mut previous = f32::MAX;
        for step in 0..=12 {
            let now = start + ms(step * 100);
            manager.tick(now);
            if let Some(fraction) = manager.remaining_fraction(id, now) {
                assert!(fraction <= previous);
                previous = fraction;
            }
        }
        assert_eq!(manager.remaining_fraction(id, start + ms(1200)), Some(0.0));

        manager.tick(start + ms(1300));
        assert!(manager.remaining_fraction(id, start + ms(1300)).is_none());
    }

    #[test]
    fn closing_progress_tracks_animation() {
        let mut manager = Manager::new().with_close_animation(ms(200));
        let notification = Notification::success("bye");
        let start = notification.created_at();
        let id = manager.push(notification);
        manager.close(id, start);

        let entry = manager.get(id).unwrap();
        assert_eq!(entry.closing_progress(start, ms(200)), 0.0);
        assert_eq!(entry.closing_progress(start + ms(100), ms(200)), 0.5);
        assert_eq!(entry.closing_progress(start + ms(500), ms(200)), 1.0);
    }

    #[test]
    fn commands_are_applied_in_order() {
        let mut manager = Manager::new();
        let notification = Notification::error("boom");
        let id = notification.id();

        manager.handle_message(Message::Inbox(Command::Show(notification)));
        assert_eq!(manager.len(), 1);
        manager.handle_message(Message::Inbox(Command::Dismiss(id)));
        assert!(manager.is_empty());
    }

    #[test]
    fn close_message_starts_exit_animation() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("test"));

        manager.handle_message(Message::Close(id));
        assert!(manager.get(id).unwrap().is_closing());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn huge_lifetime_stays_until_dismissed() {
        let mut manager = Manager::new();
        let notification = Notification::info("long").with_lifetime(Duration::MAX);
        let start = notification.created_at();
        let id = manager.push(notification);

        assert!(manager.tick(Instant::now()).is_empty());
        assert!(manager.tick(start + Duration::from_secs(86_400)).is_empty());
        assert!(!manager.get(id).unwrap().is_closing());
        assert!(manager.remaining_fraction(id, start).is_none());
        assert!(!manager.needs_frames());

        assert!(manager.dismiss(id));
    }
}
