//! Signal/slot primitive for button notifications.
//!
//! A [`Signal`] holds any number of connected slots (closures). Emitting the
//! signal invokes every slot synchronously on the calling thread, in
//! connection order. Buttons use this to deliver activations to the action
//! supplied at construction time, and callers may connect further observers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use tailwind_button_core::Signal;
//!
//! let activated = Signal::<()>::new();
//! let count = Arc::new(AtomicU32::new(0));
//!
//! let count_clone = count.clone();
//! let id = activated.connect(move |_| {
//!     count_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! activated.emit(());
//! assert_eq!(count.load(Ordering::SeqCst), 1);
//!
//! activated.disconnect(id);
//! activated.emit(());
//! assert_eq!(count.load(Ordering::SeqCst), 1);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one slot connected to a [`Signal`].
    ///
    /// Pass it to [`Signal::disconnect`] to remove the slot again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connected slots plus the order they were connected in. `SlotMap` reuses
/// freed entries, so iteration order alone does not follow connection order.
struct Connections<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

impl<Args> Connections<Args> {
    fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, slot: Slot<Args>) -> ConnectionId {
        let id = self.slots.insert(slot);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: ConnectionId) -> bool {
        if self.slots.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&other| other != id);
        true
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    fn ordered(&self) -> Vec<Slot<Args>> {
        self.order
            .iter()
            .filter_map(|&id| self.slots.get(id).cloned())
            .collect()
    }
}

/// A type-safe signal with any number of connected slots.
///
/// Slots are invoked directly in the emitting thread. The connection table is
/// not locked while slots run, so a slot may connect or disconnect slots on
/// the same signal without deadlocking; such changes take effect on the next
/// emission.
pub struct Signal<Args> {
    connections: Mutex<Connections<Args>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections::new()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id)
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
    }

    /// Block or unblock emission.
    ///
    /// While blocked, [`emit`](Self::emit) does nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking every connected slot once.
    ///
    /// Returns the number of slots that were invoked.
    #[tracing::instrument(skip_all, target = "tailwind_button_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) -> usize {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return 0;
        }

        let slots = self.connections.lock().ordered();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in &slots {
            slot(&args);
        }
        slots.len()
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        assert_eq!(signal.emit(()), 0);
        signal.set_blocked(false);
        assert_eq!(signal.emit(()), 1);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slot_may_reconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let inner = signal.clone();
        signal.connect(move |_| {
            inner.connect(|_| {});
        });

        assert_eq!(signal.emit(()), 1);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<u8>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
        assert_eq!(signal.emit(7), 0);
    }
}
