// SPDX-License-Identifier: MPL-2.0
//! Process-wide registration point for UI services.
//!
//! A [`Bus`] is a module-scoped singleton holding a cloneable handle (used by
//! producers anywhere in the process) and the receiving end of its command
//! channel (taken once by the UI subscription that drains it). The
//! application installs it at startup and uninstalls it on teardown; while
//! nothing is installed, producers simply get no handle.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::UnboundedReceiver;

struct Slot<H, C> {
    handle: H,
    inbox: Option<UnboundedReceiver<C>>,
}

/// Registry for one service's handle (`H`) and command inbox (`C`).
pub struct Bus<H, C> {
    slot: Mutex<Option<Slot<H, C>>>,
}

impl<H: Clone, C> Bus<H, C> {
    /// Creates an empty registry, usable in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Registers a handle and its inbox, replacing any previous registration.
    ///
    /// Returns `true` if an earlier registration was replaced. The replaced
    /// inbox is dropped, so handles cloned from it stop delivering.
    pub fn install(&self, handle: H, inbox: UnboundedReceiver<C>) -> bool {
        self.lock()
            .replace(Slot {
                handle,
                inbox: Some(inbox),
            })
            .is_some()
    }

    /// Removes the registration. Returns `false` if nothing was installed.
    pub fn uninstall(&self) -> bool {
        self.lock().take().is_some()
    }

    /// Returns a clone of the installed handle, if any.
    pub fn handle(&self) -> Option<H> {
        self.lock().as_ref().map(|slot| slot.handle.clone())
    }

    /// Takes the inbox. Only the first caller after `install` receives it.
    pub fn take_inbox(&self) -> Option<UnboundedReceiver<C>> {
        self.lock().as_mut().and_then(|slot| slot.inbox.take())
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Slot<H, C>>> {
        // The slot holds no invariant a panicking holder could break.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: Clone, C> Default for Bus<H, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn empty_bus_has_no_handle() {
        let bus: Bus<u8, u8> = Bus::new();
        assert!(!bus.is_installed());
        assert!(bus.handle().is_none());
        assert!(bus.take_inbox().is_none());
        assert!(!bus.uninstall());
    }

    #[test]
    fn inbox_is_taken_once() {
        let bus: Bus<u8, u8> = Bus::new();
        let (_tx, rx) = mpsc::unbounded_channel();
        assert!(!bus.install(7, rx));

        assert_eq!(bus.handle(), Some(7));
        assert!(bus.take_inbox().is_some());
        assert!(bus.take_inbox().is_none());
        assert_eq!(bus.handle(), Some(7));
    }

    #[test]
    fn reinstall_replaces_previous_registration() {
        let bus: Bus<u8, u8> = Bus::new();
        let (first_tx, first_rx) = mpsc::unbounded_channel::<u8>();
        let (_second_tx, second_rx) = mpsc::unbounded_channel();

        bus.install(1, first_rx);
        assert!(bus.install(2, second_rx));
        assert_eq!(bus.handle(), Some(2));
        assert!(first_tx.send(0).is_err(), "old inbox should be dropped");

        assert!(bus.uninstall());
        assert!(bus.handle().is_none());
    }
}
