// SPDX-License-Identifier: MPL-2.0
//! Awaitable confirmations for imperative code.
//!
//! `confirm(options).await` suspends only the caller's future until the user
//! decides; the UI keeps running. The request travels to the [`Controller`]
//! over the installed bus and the answer comes back through a oneshot
//! channel, a single-slot rendezvous between the dialog and the caller.
//!
//! [`Controller`]: super::Controller

use super::controller::{Message, Request, Responder};
use super::options::ConfirmOptions;
use crate::ui::bus::Bus;
use iced::futures::channel::mpsc::Sender;
use iced::futures::SinkExt;
use iced::keyboard::{self, key};
use iced::{event, stream, Event, Subscription};
use std::future::Future;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const INBOX_BUFFER: usize = 16;

/// Commands accepted by the dialog controller.
#[derive(Debug, Clone)]
pub enum Command {
    Open(Request),
    Close,
}

/// Receiving end drained into the [`Controller`](super::Controller).
pub type Inbox = UnboundedReceiver<Command>;

static BUS: Bus<Confirmer, Command> = Bus::new();

/// Cheap-to-clone producer handle for confirmation dialogs.
#[derive(Debug, Clone)]
pub struct Confirmer {
    tx: UnboundedSender<Command>,
}

impl Confirmer {
    /// Creates a standalone confirmer and the inbox it feeds.
    #[must_use]
    pub fn channel() -> (Self, Inbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Asks the user to confirm; resolves to `true` only on explicit confirmation.
    ///
    /// The future never fails. If the controller goes away before answering,
    /// it resolves to `false`.
    pub fn confirm(&self, options: ConfirmOptions) -> impl Future<Output = bool> + Send + 'static {
        let (responder, outcome) = Responder::new();
        if self
            .tx
            .send(Command::Open(Request::new(options, responder)))
            .is_err()
        {
            log::debug!("confirmation dropped: dialog controller is gone");
        }
        async move { outcome.await.unwrap_or(false) }
    }

    /// Asks to confirm a destructive delete of `item_name`.
    pub fn confirm_delete(
        &self,
        item_name: impl Into<String>,
        item_type: Option<&str>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.confirm(ConfirmOptions::delete(item_name, item_type))
    }

    /// Asks to confirm an update of `item_name`.
    pub fn confirm_update(
        &self,
        item_name: impl Into<String>,
        item_type: Option<&str>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.confirm(ConfirmOptions::update(item_name, item_type))
    }

    /// Force-closes the open dialog; its caller receives `false`.
    pub fn close(&self) {
        let _ = self.tx.send(Command::Close);
    }
}

/// Installs the process-wide confirmer and returns a handle to it.
pub fn install() -> Confirmer {
    let (confirmer, inbox) = Confirmer::channel();
    if BUS.install(confirmer.clone(), inbox) {
        log::warn!("confirmation service re-installed; previous dialog detached");
    } else {
        log::debug!("confirmation service installed");
    }
    confirmer
}

/// Removes the process-wide confirmer.
pub fn uninstall() -> bool {
    let removed = BUS.uninstall();
    if removed {
        log::debug!("confirmation service uninstalled");
    }
    removed
}

/// Returns the installed confirmer, if any.
pub fn confirmer() -> Option<Confirmer> {
    BUS.handle()
}

/// Takes the inbox of the installed confirmer. Only the first call succeeds.
pub fn take_inbox() -> Option<Inbox> {
    BUS.take_inbox()
}

/// Asks the user to confirm through the installed controller.
///
/// Resolves to `false` right away when no controller is installed.
pub async fn confirm(options: ConfirmOptions) -> bool {
    match confirmer() {
        Some(confirmer) => confirmer.confirm(options).await,
        None => {
            log::debug!("confirmation requested without an installed dialog");
            false
        }
    }
}

pub async fn confirm_delete(item_name: impl Into<String>, item_type: Option<&str>) -> bool {
    confirm(ConfirmOptions::delete(item_name, item_type)).await
}

pub async fn confirm_update(item_name: impl Into<String>, item_type: Option<&str>) -> bool {
    confirm(ConfirmOptions::update(item_name, item_type)).await
}

/// Force-closes the open dialog, if any.
pub fn close() {
    if let Some(confirmer) = confirmer() {
        confirmer.close();
    }
}

/// Subscription forwarding the installed inbox into the UI.
pub fn subscription() -> Subscription<Message> {
    Subscription::run(inbox_stream)
}

/// Escape/Enter bindings; only subscribe while a dialog is open.
pub fn keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| key_message(&event, status))
}

/// Maps a key press to a dialog message: Escape cancels, Enter confirms.
///
/// Keys already captured by a widget (a focused text input, for instance)
/// are left to that widget.
pub fn key_message(event: &Event, status: event::Status) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::Escape),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Enter),
            ..
        }) => Some(Message::Confirm),
        _ => None,
    }
}

fn inbox_stream() -> impl iced::futures::Stream<Item = Message> {
    stream::channel(INBOX_BUFFER, |mut output: Sender<Message>| async move {
        let Some(mut inbox) = take_inbox() else {
            log::warn!("confirmation inbox unavailable; confirm() callers will see false");
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
    use crate::ui::confirm::{Choice, Controller};
    use std::time::Instant;

    fn key_press(named: key::Named, code: key::Code) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    /// Drains pending commands into the controller, like the UI subscription.
    fn pump(inbox: &mut Inbox, controller: &mut Controller) {
        while let Ok(command) = inbox.try_recv() {
            controller.apply(command, Instant::now());
        }
    }

    #[tokio::test]
    async fn confirm_resolves_true_on_confirm() {
        let (confirmer, mut inbox) = Confirmer::channel();
        let mut controller = Controller::new();

        let outcome = tokio::spawn(confirmer.confirm_delete("Course A", Some("course")));
        tokio::task::yield_now().await;
        pump(&mut inbox, &mut controller);

        let shown = controller.current().expect("dialog should be open");
        assert_eq!(shown.options().title_text(), "Delete course");
        controller.resolve(Choice::Confirm, Instant::now());

        assert!(outcome.await.unwrap());
    }

    #[tokio::test]
    async fn close_command_resolves_false() {
        let (confirmer, mut inbox) = Confirmer::channel();
        let mut controller = Controller::new();

        let pending = confirmer.confirm(ConfirmOptions::new().message("Proceed?"));
        confirmer.close();
        pump(&mut inbox, &mut controller);

        assert!(!pending.await);
    }

    #[tokio::test]
    async fn dropped_controller_resolves_false() {
        let (confirmer, inbox) = Confirmer::channel();
        drop(inbox);

        assert!(!confirmer.confirm_update("Jane", None).await);
    }

    #[test]
    fn escape_and_enter_map_to_dialog_messages() {
        let escape = key_press(key::Named::Escape, key::Code::Escape);
        let enter = key_press(key::Named::Enter, key::Code::Enter);
        let tab = key_press(key::Named::Tab, key::Code::Tab);

        assert!(matches!(
            key_message(&escape, event::Status::Ignored),
            Some(Message::Escape)
        ));
        assert!(matches!(
            key_message(&enter, event::Status::Ignored),
            Some(Message::Confirm)
        ));
        assert!(key_message(&tab, event::Status::Ignored).is_none());
    }

    #[test]
    fn captured_keys_are_left_to_widgets() {
        let enter = key_press(key::Named::Enter, key::Code::Enter);
        assert!(key_message(&enter, event::Status::Captured).is_none());
    }

    #[tokio::test]
    async fn keyboard_messages_settle_the_caller() {
        let (confirmer, mut inbox) = Confirmer::channel();
        let mut controller = Controller::new();
        let escape = key_press(key::Named::Escape, key::Code::Escape);
        let enter = key_press(key::Named::Enter, key::Code::Enter);

        let cancelled = confirmer.confirm_delete("Course A", Some("course"));
        pump(&mut inbox, &mut controller);
        let message = key_message(&escape, event::Status::Ignored).expect("escape is bound");
        controller.handle_message(message);
        assert!(!cancelled.await);

        controller.tick(Instant::now() + controller.exit_animation());
        assert!(!controller.is_open());

        let confirmed = confirmer.confirm_update("Course B", Some("course"));
        pump(&mut inbox, &mut controller);
        assert!(controller.is_open());
        let message = key_message(&enter, event::Status::Ignored).expect("enter is bound");
        controller.handle_message(message);
        assert!(confirmed.await);
    }
}
