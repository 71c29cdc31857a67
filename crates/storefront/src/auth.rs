//! Authentication session state.
//!
//! Holds the mocked signed-in user for this process. The store only
//! records session transitions; credential checking lives in
//! [`crate::services::auth::MockAuthService`], which the presentation
//! layer calls before driving the store through
//! `login_start` → `login_succeeded` / `login_failed`.

use shopease_core::{Email, UserId};

use crate::observe::{Subscribers, SubscriptionId};

/// The signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// Session state: current user plus the in-flight and error flags the
/// login form renders.
#[derive(Debug, Default)]
pub struct AuthStore {
    user: Option<AuthUser>,
    loading: bool,
    error: Option<String>,
    subscribers: Subscribers,
}

impl AuthStore {
    /// Create a signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ====== Mutations ======

    /// Mark a login attempt as in flight and clear any previous error.
    pub fn login_start(&mut self) {
        self.loading = true;
        self.error = None;
        self.subscribers.notify();
    }

    /// Record a successful login.
    pub fn login_succeeded(&mut self, user: AuthUser) {
        tracing::info!(user_id = %user.id, "Login succeeded");
        self.user = Some(user);
        self.loading = false;
        self.error = None;
        self.subscribers.notify();
    }

    /// Record a failed login. The session stays signed out and the message
    /// is kept for the form to display; resubmitting retries.
    pub fn login_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Login failed");
        self.user = None;
        self.loading = false;
        self.error = Some(message);
        self.subscribers.notify();
    }

    /// Dismiss the current error without touching the session.
    pub fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.subscribers.notify();
        }
    }

    /// Sign out, restoring the default state.
    pub fn logout(&mut self) {
        tracing::info!("Logged out");
        self.user = None;
        self.loading = false;
        self.error = None;
        self.subscribers.notify();
    }

    // ====== Queries ======

    /// Whether a user is signed in. Gates the checkout route.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Whether a login attempt is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last login error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
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
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn demo_user() -> AuthUser {
        AuthUser {
            id: UserId::new(1),
            name: "Demo User".to_string(),
            email: Email::parse("demo@example.com").unwrap(),
        }
    }

    #[test]
    fn test_login_flow_success() {
        let mut auth = AuthStore::new();
        assert!(!auth.is_authenticated());

        auth.login_start();
        assert!(auth.is_loading());
        assert_eq!(auth.error(), None);

        auth.login_succeeded(demo_user());
        assert!(auth.is_authenticated());
        assert!(!auth.is_loading());
        assert_eq!(auth.user().unwrap().name, "Demo User");
    }

    #[test]
    fn test_login_flow_failure_is_retryable() {
        let mut auth = AuthStore::new();

        auth.login_start();
        auth.login_failed("Invalid email or password");
        assert!(!auth.is_authenticated());
        assert_eq!(auth.error(), Some("Invalid email or password"));

        // Resubmission clears the error before the next outcome.
        auth.login_start();
        assert_eq!(auth.error(), None);
        auth.login_succeeded(demo_user());
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_clear_error() {
        let mut auth = AuthStore::new();
        auth.login_failed("nope");
        auth.clear_error();
        assert_eq!(auth.error(), None);
    }

    #[test]
    fn test_logout_restores_defaults() {
        let mut auth = AuthStore::new();
        auth.login_succeeded(demo_user());

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
        assert_eq!(auth.error(), None);
        assert!(!auth.is_loading());
    }

    #[test]
    fn test_clear_error_without_error_does_not_notify() {
        let mut auth = AuthStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = Arc::clone(&calls);
            auth.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        auth.clear_error();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        auth.login_failed("nope");
        auth.clear_error();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
