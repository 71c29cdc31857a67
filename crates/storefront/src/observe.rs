//! Change notification for stores.
//!
//! Every store owns a [`Subscribers`] registry and pings it after each state
//! mutation. Listeners carry no payload; they re-read whatever store views
//! they care about, so derived values are always computed from current state.

use std::fmt;

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut() + Send>;

/// Registry of change listeners owned by a store.
///
/// Ids are never reused, so a stale id held after `unsubscribe` is harmless.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its id.
    pub fn subscribe(&mut self, listener: impl FnMut() + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every listener in registration order.
    pub fn notify(&mut self) {
        for (_, listener) in &mut self.entries {
            listener();
        }
    }

    /// Number of active listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Subscribers {
    // Listeners are opaque closures; show only the count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_notify_invokes_each_listener() {
        let mut subscribers = Subscribers::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            subscribers.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        subscribers.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        subscribers.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut subscribers = Subscribers::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let id = {
            let calls = Arc::clone(&calls);
            subscribers.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        subscribers.notify();
        assert!(subscribers.unsubscribe(id));
        subscribers.notify();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_false() {
        let mut subscribers = Subscribers::new();
        let id = subscribers.subscribe(|| {});
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut subscribers = Subscribers::new();
        let first = subscribers.subscribe(|| {});
        subscribers.unsubscribe(first);
        let second = subscribers.subscribe(|| {});
        assert_ne!(first, second);
        assert_eq!(subscribers.len(), 1);
    }
}
