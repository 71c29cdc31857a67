//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` type that wraps the errors raised by the
//! storefront's own layers. Fallible entry points return `Result<T, AppError>`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Durable storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::Storage(StorageError::Parse("bad json".to_string()));
        assert_eq!(err.to_string(), "Storage error: Parse error: bad json");
    }

    #[test]
    fn test_app_error_from_auth() {
        let err = AppError::from(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Auth error: Invalid email or password");
    }
}
