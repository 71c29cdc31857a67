//! Authentication error types.
//!
//! Display strings double as the user-visible form messages, so they are
//! written for the shopper, not the log.

use thiserror::Error;

use shopease_core::EmailError;

/// Errors that can occur during mock authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials do not match the demo account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email failed validation during registration.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// First or last name was blank during registration.
    #[error("First and last name are required")]
    BlankName,

    /// Password too short during registration.
    #[error("Password must be at least {min} characters")]
    WeakPassword {
        /// Minimum accepted length.
        min: usize,
    },
}
