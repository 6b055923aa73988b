// SPDX-License-Identifier: MPL-2.0
//! Process-wide access to the notification queue.
//!
//! The application installs the service once at startup. From then on any
//! code, UI or not, can raise a toast through the free functions in this
//! module or through a cloned [`Notifier`]. Commands travel over an unbounded
//! channel, so callers never block and the queue sees them in send order.
//! Before installation (or after [`uninstall`]) every call is a silent no-op.

use super::lifetime::Lifetime;
use super::manager::Message;
use super::notification::{Kind, Notification, NotificationId};
use crate::ui::bus::Bus;
use iced::futures::channel::mpsc::Sender;
use iced::futures::SinkExt;
use iced::{stream, Subscription};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Capacity of the channel between the inbox task and the iced runtime.
const INBOX_BUFFER: usize = 64;

/// Commands accepted by the notification queue.
#[derive(Debug, Clone)]
pub enum Command {
    Show(Notification),
    Dismiss(NotificationId),
}

/// Receiving end drained into the [`Manager`](super::Manager).
pub type Inbox = UnboundedReceiver<Command>;

static BUS: Bus<Notifier, Command> = Bus::new();

/// Cheap-to-clone producer handle for the notification queue.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Command>,
    default_lifetime: Lifetime,
}

impl Notifier {
    /// Creates a standalone notifier and the inbox it feeds.
    #[must_use]
    pub fn channel() -> (Self, Inbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                default_lifetime: Lifetime::default(),
            },
            rx,
        )
    }

    /// Sets the lifetime used by [`notify`](Self::notify) and its wrappers.
    #[must_use]
    pub fn with_default_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    #[must_use]
    pub fn default_lifetime(&self) -> Lifetime {
        self.default_lifetime
    }

    /// Enqueues a fully built notification and returns its id immediately.
    pub fn show(&self, notification: Notification) -> NotificationId {
        let id = notification.id();
        if self.tx.send(Command::Show(notification)).is_err() {
            log::debug!("notification {:?} dropped: queue is gone", id);
        }
        id
    }

    /// Enqueues a notification with the kind's default title.
    pub fn notify(&self, kind: Kind, message: impl Into<String>) -> NotificationId {
        self.show(Notification::new(kind, message).with_lifetime(self.default_lifetime))
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Error, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Warning, message)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Info, message)
    }

    /// Removes a notification immediately. Unknown ids are ignored.
    pub fn dismiss(&self, id: NotificationId) {
        let _ = self.tx.send(Command::Dismiss(id));
    }
}

/// Installs the process-wide notifier and returns a handle to it.
///
/// Any previous installation is replaced.
pub fn install(default_lifetime: Lifetime) -> Notifier {
    let (notifier, inbox) = Notifier::channel();
    let notifier = notifier.with_default_lifetime(default_lifetime);
    if BUS.install(notifier.clone(), inbox) {
        log::warn!("notification service re-installed; previous queue detached");
    } else {
        log::debug!("notification service installed");
    }
    notifier
}

/// Removes the process-wide notifier. Later calls become no-ops.
pub fn uninstall() -> bool {
    let removed = BUS.uninstall();
    if removed {
        log::debug!("notification service uninstalled");
    }
    removed
}

/// Returns the installed notifier, if any.
pub fn notifier() -> Option<Notifier> {
    BUS.handle()
}

/// Takes the inbox of the installed notifier. Only the first call succeeds.
pub fn take_inbox() -> Option<Inbox> {
    BUS.take_inbox()
}

/// Enqueues a notification built by the caller.
///
/// Returns the notification's id whether or not a queue is installed.
pub fn show(notification: Notification) -> NotificationId {
    match notifier() {
        Some(notifier) => notifier.show(notification),
        None => notification.id(),
    }
}

/// Enqueues a notification of the given kind with the default title and lifetime.
pub fn notify(kind: Kind, message: impl Into<String>) -> NotificationId {
    match notifier() {
        Some(notifier) => notifier.notify(kind, message),
        None => NotificationId::new(),
    }
}

pub fn notify_success(message: impl Into<String>) -> NotificationId {
    notify(Kind::Success, message)
}

pub fn notify_error(message: impl Into<String>) -> NotificationId {
    notify(Kind::Error, message)
}

pub fn notify_warning(message: impl Into<String>) -> NotificationId {
    notify(Kind::Warning, message)
}

pub fn notify_info(message: impl Into<String>) -> NotificationId {
    notify(Kind::Info, message)
}

/// Removes a notification immediately. No-op if it is not queued.
pub fn dismiss(id: NotificationId) {
    if let Some(notifier) = notifier() {
        notifier.dismiss(id);
    }
}

/// Subscription forwarding the installed inbox into the UI.
pub fn subscription() -> Subscription<Message> {
    Subscription::run(inbox_stream)
}

fn inbox_stream() -> impl iced::futures::Stream<Item = Message> {
    stream::channel(INBOX_BUFFER, |mut output: Sender<Message>| async move {
        let Some(mut inbox) = take_inbox() else {
            log::warn!("notification inbox unavailable; toasts from notifiers will be ignored");
            return;
        };

        while let Some(command) = inbox.recv().await {
            if output.send(Message::Inbox(command)).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn show_returns_id_immediately_and_forwards_in_order() {
        let (notifier, mut inbox) = Notifier::channel();
        let first = notifier.success("first");
        let second = notifier.error("second");
        notifier.dismiss(first);

        match inbox.try_recv() {
            Ok(Command::Show(n)) => assert_eq!(n.id(), first),
            other => panic!("unexpected command: {other:?}"),
        }
        match inbox.try_recv() {
            Ok(Command::Show(n)) => {
                assert_eq!(n.id(), second);
                assert_eq!(n.title(), "Error");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(matches!(inbox.try_recv(), Ok(Command::Dismiss(id)) if id == first));
    }

    #[test]
    fn notify_applies_default_lifetime() {
        let (notifier, mut inbox) = Notifier::channel();
        let notifier = notifier.with_default_lifetime(Lifetime::from_millis(1200));
        notifier.info("hello");

        match inbox.try_recv() {
            Ok(Command::Show(n)) => {
                assert_eq!(n.lifetime(), Lifetime::Timed(Duration::from_millis(1200)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sending_after_inbox_dropped_is_silent() {
        let (notifier, inbox) = Notifier::channel();
        drop(inbox);

        let id = notifier.warning("nobody listens");
        notifier.dismiss(id);
    }

    #[test]
    fn ids_are_unique_under_rapid_fire() {
        let (notifier, _inbox) = Notifier::channel();
        let mut ids: Vec<_> = (0..1000).map(|i| notifier.info(format!("n{i}"))).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }
}
