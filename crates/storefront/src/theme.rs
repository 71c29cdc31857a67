//! Theme preference, persisted across sessions.
//!
//! The stored value is the plain string `light` or `dark`. Anything else
//! found in storage falls back to the configured default; the store never
//! surfaces a storage problem to the caller.

use std::sync::Arc;

use shopease_core::Theme;

use crate::observe::{Subscribers, SubscriptionId};
use crate::storage::{KvStorage, keys};

/// Light/dark preference backed by durable storage.
pub struct ThemeStore {
    storage: Arc<dyn KvStorage>,
    current: Theme,
    subscribers: Subscribers,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Create a store backed by `storage`, restoring the stored preference
    /// or falling back to `default`.
    #[must_use]
    pub fn new(storage: Arc<dyn KvStorage>, default: Theme) -> Self {
        let current = load(storage.as_ref()).unwrap_or(default);
        Self {
            storage,
            current,
            subscribers: Subscribers::new(),
        }
    }

    // ====== Mutations ======

    /// Switch to `theme` and persist the choice.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
        self.subscribers.notify();
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }

    // ====== Queries ======

    /// The active theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    // ====== Observation ======

    /// Register a listener invoked after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut() + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.set(keys::THEME, self.current.as_str()) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
    }
}

/// Read the stored preference. Unreadable or unknown values yield `None`.
fn load(storage: &dyn KvStorage) -> Option<Theme> {
    match storage.get(keys::THEME) {
        Ok(Some(raw)) => {
            let parsed = Theme::parse(raw.trim());
            if parsed.is_none() {
                tracing::warn!(value = %raw, "Ignoring unknown stored theme");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read theme preference");
            None
        }
    }
}
