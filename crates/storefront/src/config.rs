//! Storefront configuration loaded from environment variables.
//!
//! Every variable has a default, so `from_env` succeeds on a bare
//! environment. The latency knobs exist because the backend is simulated;
//! tests set them to zero.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPEASE_DATA_DIR` - Directory for durable shopper state (default: data)
//! - `SHOPEASE_LOGIN_LATENCY_MS` - Simulated auth round-trip in ms (default: 1000)
//! - `SHOPEASE_PAYMENT_LATENCY_MS` - Simulated payment processing in ms (default: 2000)
//! - `SHOPEASE_FETCH_LATENCY_MS` - Simulated catalog fetch in ms (default: 500)
//! - `SHOPEASE_DEFAULT_THEME` - Theme used when none is stored: light or dark (default: light)

use std::path::PathBuf;
use std::time::Duration;

use shopease_core::Theme;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOGIN_LATENCY_MS: u64 = 1000;
const DEFAULT_PAYMENT_LATENCY_MS: u64 = 2000;
const DEFAULT_FETCH_LATENCY_MS: u64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory where durable shopper state is written
    pub data_dir: PathBuf,
    /// Simulated latency for the mock auth backend
    pub login_latency: Duration,
    /// Simulated latency for the mock payment processor
    pub payment_latency: Duration,
    /// Simulated latency for catalog fetches
    pub fetch_latency: Duration,
    /// Theme applied when storage holds no preference
    pub default_theme: Theme,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SHOPEASE_DATA_DIR", DEFAULT_DATA_DIR));
        let login_latency = get_env_latency("SHOPEASE_LOGIN_LATENCY_MS", DEFAULT_LOGIN_LATENCY_MS)?;
        let payment_latency =
            get_env_latency("SHOPEASE_PAYMENT_LATENCY_MS", DEFAULT_PAYMENT_LATENCY_MS)?;
        let fetch_latency = get_env_latency("SHOPEASE_FETCH_LATENCY_MS", DEFAULT_FETCH_LATENCY_MS)?;

        let default_theme = match get_optional_env("SHOPEASE_DEFAULT_THEME") {
            Some(raw) => parse_theme("SHOPEASE_DEFAULT_THEME", &raw)?,
            None => Theme::default(),
        };

        Ok(Self {
            data_dir,
            login_latency,
            payment_latency,
            fetch_latency,
            default_theme,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            login_latency: Duration::from_millis(DEFAULT_LOGIN_LATENCY_MS),
            payment_latency: Duration::from_millis(DEFAULT_PAYMENT_LATENCY_MS),
            fetch_latency: Duration::from_millis(DEFAULT_FETCH_LATENCY_MS),
            default_theme: Theme::default(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a latency from environment, falling back to a default in milliseconds.
fn get_env_latency(key: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    match get_optional_env(key) {
        Some(raw) => parse_latency(key, &raw),
        None => Ok(Duration::from_millis(default_ms)),
    }
}

/// Parse a millisecond count into a `Duration`.
fn parse_latency(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a theme name.
fn parse_theme(key: &str, raw: &str) -> Result<Theme, ConfigError> {
    Theme::parse(raw).ok_or_else(|| {
        ConfigError::InvalidEnvVar(key.to_string(), format!("unknown theme '{raw}'"))
    })
}
