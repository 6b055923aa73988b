// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialog state machine.
//!
//! The controller owns a single dialog slot plus a FIFO of waiting requests:
//!
//! ```text
//! Idle --submit--> Open --resolve(choice)--> Resolving --exit animation--> Idle
//!                   ^                                                        |
//!                   +-------------- next queued request ---------------------+
//! ```
//!
//! The caller's future is settled the moment a choice is made, before the
//! exit animation runs. Every request is settled exactly once.

use super::options::ConfirmOptions;
use super::service::Command;
use crate::config::DEFAULT_DIALOG_EXIT_ANIMATION_MS;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Unique identifier for a confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Single-use resolver of a pending confirmation.
///
/// Clones share the same underlying sender, so whichever clone settles first
/// wins and every later attempt is ignored.
#[derive(Clone)]
pub struct Responder(Arc<Mutex<Option<oneshot::Sender<bool>>>>);

impl Responder {
    /// Creates a responder and the receiver its outcome is delivered to.
    #[must_use]
    pub fn new() -> (Self, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        (Self(Arc::new(Mutex::new(Some(tx)))), rx)
    }

    /// Delivers the outcome. Returns `false` if it was already settled.
    pub fn settle(&self, confirmed: bool) -> bool {
        let sender = self
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(sender) => {
                // The caller may have dropped its future; nothing to report then.
                let _ = sender.send(confirmed);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Returns true if the caller stopped waiting for the outcome.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(oneshot::Sender::is_closed)
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// A confirmation request waiting for, or showing, a dialog.
#[derive(Debug, Clone)]
pub struct Request {
    id: RequestId,
    options: ConfirmOptions,
    responder: Responder,
}

impl Request {
    #[must_use]
    pub fn new(options: ConfirmOptions, responder: Responder) -> Self {
        Self {
            id: RequestId::new(),
            options,
            responder,
        }
    }

    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }
}

/// The user action (or programmatic close) that ended a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Confirm button or Enter.
    Confirm,
    /// Cancel button.
    Cancel,
    /// Click on the backdrop outside the dialog.
    Backdrop,
    /// Escape key.
    Escape,
    /// Forced close by code.
    Close,
}

impl Choice {
    /// Only an explicit confirmation resolves to `true`.
    #[must_use]
    pub fn outcome(self) -> bool {
        matches!(self, Choice::Confirm)
    }
}

/// Observable state of the dialog slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Open,
    Resolving,
}

/// Messages for dialog state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Confirm,
    Cancel,
    Backdrop,
    Escape,
    /// Animation frame; carries the frame's monotonic timestamp.
    Frame(Instant),
    /// A command forwarded from a [`Confirmer`](super::Confirmer).
    Inbox(Command),
}

#[derive(Debug)]
struct Active {
    request: Request,
    /// Set once a choice was made; the exit animation runs from here.
    resolved: Option<(Choice, Instant)>,
}

/// Owns the dialog slot and the queue of waiting requests.
#[derive(Debug)]
pub struct Controller {
    active: Option<Active>,
    queue: VecDeque<Request>,
    exit_animation: Duration,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            active: None,
            queue: VecDeque::new(),
            exit_animation: Duration::from_millis(DEFAULT_DIALOG_EXIT_ANIMATION_MS),
        }
    }
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exit animation length between a choice and the next request.
    #[must_use]
    pub fn with_exit_animation(mut self, exit_animation: Duration) -> Self {
        self.exit_animation = exit_animation;
        self
    }

    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        self.exit_animation
    }

    /// Shows a request, or queues it behind the current dialog.
    ///
    /// Returns `true` if the request was opened right away.
    pub fn submit(&mut self, request: Request) -> bool {
        if self.active.is_some() {
            log::debug!(
                "confirmation {:?} queued behind the open dialog ({} waiting)",
                request.id,
                self.queue.len() + 1
            );
            self.queue.push_back(request);
            return false;
        }
        self.open(request)
    }

    /// Resolves the open dialog with `choice`.
    ///
    /// Settles the caller's future immediately and starts the exit animation.
    /// Returns `false` (and does nothing) when no dialog is open, including
    /// while a previous choice is still animating out.
    pub fn resolve(&mut self, choice: Choice, now: Instant) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.resolved.is_some() {
            return false;
        }

        active.request.responder.settle(choice.outcome());
        active.resolved = Some((choice, now));
        log::debug!(
            "confirmation {:?} resolved by {:?} -> {}",
            active.request.id,
            choice,
            choice.outcome()
        );
        true
    }

    /// Force-closes the open dialog, settling it with `false`.
    pub fn close(&mut self, now: Instant) -> bool {
        self.resolve(Choice::Close, now)
    }

    /// Finishes the exit animation once it has run, then opens the next
    /// queued request.
    pub fn tick(&mut self, now: Instant) {
        let finished = self.active.as_ref().is_some_and(|active| {
            active
                .resolved
                .is_some_and(|(_, at)| now.saturating_duration_since(at) >= self.exit_animation)
        });
        if finished {
            self.active = None;
            self.promote();
        }
    }

    /// Applies a command received from a confirmer.
    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::Open(request) => {
                self.submit(request);
            }
            Command::Close => {
                self.close(now);
            }
        }
    }

    /// Handles a dialog message.
    pub fn handle_message(&mut self, message: Message) {
        let now = Instant::now();
        match message {
            Message::Confirm => {
                self.resolve(Choice::Confirm, now);
            }
            Message::Cancel => {
                self.resolve(Choice::Cancel, now);
            }
            Message::Backdrop => {
                self.resolve(Choice::Backdrop, now);
            }
            Message::Escape => {
                self.resolve(Choice::Escape, now);
            }
            Message::Frame(now) => self.tick(now),
            Message::Inbox(command) => self.apply(command, now),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.active {
            None => Phase::Idle,
            Some(Active { resolved: None, .. }) => Phase::Open,
            Some(Active {
                resolved: Some(_), ..
            }) => Phase::Resolving,
        }
    }

    /// Returns true while a dialog awaits a choice (keyboard bindings live).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase() == Phase::Open
    }

    /// Returns true while the page behind the dialog must not scroll.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.active.is_some()
    }

    /// Returns true while the exit animation needs frame updates.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.phase() == Phase::Resolving
    }

    /// The request currently on screen (open or animating out).
    #[must_use]
    pub fn current(&self) -> Option<&Request> {
        self.active.as_ref().map(|active| &active.request)
    }

    /// The choice that resolved the current dialog, while it animates out.
    #[must_use]
    pub fn resolved_choice(&self) -> Option<Choice> {
        self.active
            .as_ref()
            .and_then(|active| active.resolved.map(|(choice, _)| choice))
    }

    /// Progress of the exit animation in `0.0..=1.0` (0 while open).
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f32 {
        match self.active.as_ref().and_then(|active| active.resolved) {
            None => 0.0,
            Some(_) if self.exit_animation.is_zero() => 1.0,
            Some((_, at)) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / self.exit_animation.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Number of requests waiting behind the current dialog.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    fn open(&mut self, request: Request) -> bool {
        if request.responder.is_abandoned() {
            log::debug!("confirmation {:?} skipped: caller stopped waiting", request.id);
            return false;
        }
        log::debug!(
            "confirmation {:?} opened: {}",
            request.id,
            request.options.title_text()
        );
        self.active = Some(Active {
            request,
            resolved: None,
        });
        true
    }

    fn promote(&mut self) {
        while let Some(request) = self.queue.pop_front() {
            if self.open(request) {
                break;
            }
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        // Nobody will ever answer these; release the waiting callers.
        if let Some(active) = self.active.take() {
            active.request.responder.settle(false);
        }
        for request in self.queue.drain(..) {
            request.responder.settle(false);
        }
    }
}
