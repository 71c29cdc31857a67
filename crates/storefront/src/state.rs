//! Application state: one instance of every store.
//!
//! [`StorefrontState`] wires the stores and simulated services together
//! for a single shopper session. Stores are plain fields rather than
//! globals; anything that needs one receives it explicitly. Mutation goes
//! through `&mut`, so the single-writer rule is enforced by the borrow
//! checker rather than by locks.

use std::sync::Arc;

use crate::auth::AuthStore;
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::config::StorefrontConfig;
use crate::membership::MembershipStore;
use crate::recently_viewed::RecentlyViewedTracker;
use crate::services::auth::MockAuthService;
use crate::services::membership::MembershipService;
use crate::storage::{FileStorage, KvStorage};
use crate::theme::ThemeStore;
use crate::wishlist::WishlistStore;

/// Every store plus the simulated backend services, for one session.
#[derive(Debug)]
pub struct StorefrontState {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub membership: MembershipStore,
    pub auth: AuthStore,
    pub theme: ThemeStore,
    pub recently_viewed: RecentlyViewedTracker,
    pub auth_service: MockAuthService,
    pub membership_service: MembershipService,
}

impl StorefrontState {
    /// Build a session over file storage rooted at the configured data
    /// directory. Durable state from previous sessions is restored here;
    /// everything else starts at its defaults.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        Self::with_storage(config, storage)
    }

    /// Build a session over an explicit storage backend. Tests pass
    /// [`crate::storage::MemoryStorage`] here.
    #[must_use]
    pub fn with_storage(config: &StorefrontConfig, storage: Arc<dyn KvStorage>) -> Self {
        Self {
            catalog: CatalogStore::new(),
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
            membership: MembershipStore::new(),
            auth: AuthStore::new(),
            theme: ThemeStore::new(Arc::clone(&storage), config.default_theme),
            recently_viewed: RecentlyViewedTracker::new(storage),
            auth_service: MockAuthService::new(config.login_latency),
            membership_service: MembershipService::new(config.payment_latency),
        }
    }

    /// Load the built-in demo catalog into the catalog store.
    pub fn load_demo_catalog(&mut self) {
        self.catalog
            .set_products(crate::catalog::data::demo_products());
        self.catalog
            .set_categories(crate::catalog::data::demo_categories());
    }
}
