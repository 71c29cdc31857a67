//! Mocked authentication backend.
//!
//! [`MockAuthService`] checks credentials against a single built-in demo
//! account after sleeping a configured latency, standing in for a network
//! round trip. Registration validates its inputs, then mints sequential
//! user ids after the demo user's.
//!
//! The service returns plain results; callers drive [`crate::auth::AuthStore`]
//! with the outcome. A second call before the first resolves is not
//! guarded against.

mod error;

pub use error::AuthError;

use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

use shopease_core::{Email, UserId};

use crate::auth::AuthUser;

/// Email of the built-in demo account.
pub const DEMO_EMAIL: &str = "demo@example.com";

/// Password of the built-in demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Simulated authentication backend with a single demo account.
#[derive(Debug)]
pub struct MockAuthService {
    latency: Duration,
    // Registration ids follow the demo user's id 1.
    next_id: AtomicI32,
}

impl MockAuthService {
    /// Create a service that sleeps `latency` before answering.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self {
            latency,
            next_id: AtomicI32::new(2),
        }
    }

    /// Check credentials against the demo account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for anything other than the
    /// exact demo email/password pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        tokio::time::sleep(self.latency).await;

        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!("Demo credentials accepted");
        Ok(AuthUser {
            id: UserId::new(1),
            name: "Demo User".to_string(),
            email: Email::parse(DEMO_EMAIL)?,
        })
    }

    /// Register a new account. Validation runs before the simulated round
    /// trip so bad input fails fast.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BlankName` if either name is blank,
    /// `AuthError::InvalidEmail` for a malformed email, and
    /// `AuthError::WeakPassword` for a too-short password.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AuthError::BlankName);
        }

        let email = Email::parse(email)?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        tokio::time::sleep(self.latency).await;

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        tracing::debug!(user_id = %id, "Registered mock account");
        Ok(AuthUser {
            id,
            name: format!("{first_name} {last_name}"),
            email,
        })
    }
}
