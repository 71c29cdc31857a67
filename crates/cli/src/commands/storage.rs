//! Manage the durable key/value state.

use shopease_storefront::config::StorefrontConfig;
use shopease_storefront::storage::{FileStorage, KvStorage, keys};

/// Remove both durable keys from the configured data directory.
///
/// # Errors
///
/// Returns an error if configuration loading or a removal fails.
#[allow(clippy::print_stdout)]
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let storage = FileStorage::new(&config.data_dir);

    for key in [keys::THEME, keys::RECENTLY_VIEWED] {
        storage.remove(key)?;
        tracing::debug!(key, "Removed durable entry");
    }

    println!("Cleared durable state in {:?}", config.data_dir);
    Ok(())
}
