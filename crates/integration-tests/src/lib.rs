//! Integration test support for ShopEase.
//!
//! Scenario tests live under `tests/`; this library provides the session
//! harness they share. Each [`TestSession`] owns a unique temporary data
//! directory so tests can run in parallel and still exercise the real
//! file-backed storage. Latencies are zeroed so simulated backends answer
//! immediately.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};
use std::time::Duration;

use shopease_storefront::config::StorefrontConfig;
use shopease_storefront::state::StorefrontState;

/// A storefront session over a throwaway data directory.
///
/// The directory is removed on drop. `reopen` builds a second session
/// over the same directory to observe what survived.
pub struct TestSession {
    data_dir: PathBuf,
    /// The state under test.
    pub state: StorefrontState,
}

impl TestSession {
    /// Start a session with an empty catalog and fresh storage.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = std::env::temp_dir().join(format!("shopease-it-{}", uuid::Uuid::new_v4()));
        let state = StorefrontState::new(&Self::config(&data_dir));
        Self { data_dir, state }
    }

    /// Start a session with the demo catalog loaded.
    #[must_use]
    pub fn with_demo_catalog() -> Self {
        let mut session = Self::new();
        session.state.load_demo_catalog();
        session
    }

    /// Drop the in-memory state and rebuild it over the same data
    /// directory, as a process restart would.
    #[must_use]
    pub fn reopen(self) -> Self {
        let data_dir = self.data_dir.clone();
        // Keep the directory alive across the rebuild.
        std::mem::forget(self);
        let state = StorefrontState::new(&Self::config(&data_dir));
        Self { data_dir, state }
    }

    /// The directory holding this session's durable state.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn config(data_dir: &Path) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: data_dir.to_path_buf(),
            login_latency: Duration::ZERO,
            payment_latency: Duration::ZERO,
            fetch_latency: Duration::ZERO,
            ..StorefrontConfig::default()
        }
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestSession {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}
