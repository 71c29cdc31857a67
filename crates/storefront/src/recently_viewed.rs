//! Recently-viewed products: a bounded, durable MRU list.
//!
//! Every view moves the product to the front and rewrites the stored
//! payload. Storage problems never surface to the caller: a corrupt
//! payload is discarded on load and a failed write keeps the in-memory
//! list authoritative until the next successful one.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use shopease_core::{Product, ProductId};

use crate::observe::{Subscribers, SubscriptionId};
use crate::storage::{KvStorage, keys};

/// Maximum number of products the list retains.
pub const MAX_RECENTLY_VIEWED: usize = 8;

/// How many similar products the detail view shows.
pub const SIMILAR_PRODUCTS_LIMIT: usize = 4;

/// Bounded most-recent-first list of viewed products, persisted on every
/// mutation.
pub struct RecentlyViewedTracker {
    storage: Arc<dyn KvStorage>,
    items: Vec<Product>,
    subscribers: Subscribers,
}

impl std::fmt::Debug for RecentlyViewedTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentlyViewedTracker")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

impl RecentlyViewedTracker {
    /// Create a tracker backed by `storage`, loading whatever survives
    /// from the previous session.
    #[must_use]
    pub fn new(storage: Arc<dyn KvStorage>) -> Self {
        let items = load(storage.as_ref());
        Self {
            storage,
            items,
            subscribers: Subscribers::new(),
        }
    }

    // ====== Mutations ======

    /// Record a product view: move (or insert) the snapshot at the front
    /// and drop anything beyond the bound.
    pub fn record_view(&mut self, product: &Product) {
        self.items.retain(|item| item.id != product.id);
        self.items.insert(0, product.clone());
        self.items.truncate(MAX_RECENTLY_VIEWED);
        self.persist();
        self.subscribers.notify();
    }

    /// Forget all viewed products and delete the stored payload.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.storage.remove(keys::RECENTLY_VIEWED) {
            tracing::warn!(error = %e, "Failed to delete recently-viewed payload");
        }
        self.subscribers.notify();
    }

    // ====== Queries ======

    /// Viewed products, most recent first.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of tracked products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been viewed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode recently-viewed payload");
                return;
            }
        };
        if let Err(e) = self.storage.set(keys::RECENTLY_VIEWED, &payload) {
            tracing::warn!(error = %e, "Failed to persist recently-viewed payload");
        }
    }
}

/// Load the stored list, normalizing it back to the invariants (unique
/// ids, at most the bound). Anything unreadable resets to empty.
fn load(storage: &dyn KvStorage) -> Vec<Product> {
    let raw = match storage.get(keys::RECENTLY_VIEWED) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read recently-viewed payload");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Product>>(&raw) {
        Ok(items) => {
            let mut seen = HashSet::new();
            let mut items: Vec<Product> = items
                .into_iter()
                .filter(|item| seen.insert(item.id))
                .collect();
            items.truncate(MAX_RECENTLY_VIEWED);
            items
        }
        Err(e) => {
            tracing::warn!(error = %e, "Discarding corrupt recently-viewed payload");
            if let Err(e) = storage.remove(keys::RECENTLY_VIEWED) {
                tracing::warn!(error = %e, "Failed to delete corrupt payload");
            }
            Vec::new()
        }
    }
}

/// Products related to `product`: same category or priced within 20%
/// either way, excluding the product itself. Deduplicated by id, best
/// rated first, truncated to `limit`.
#[must_use]
pub fn similar_products(product: &Product, catalog: &[Product], limit: usize) -> Vec<Product> {
    let low = product.price.amount * Decimal::new(8, 1);
    let high = product.price.amount * Decimal::new(12, 1);

    let same_category = catalog
        .iter()
        .filter(|candidate| candidate.id != product.id && candidate.category == product.category);
    let similar_price = catalog.iter().filter(|candidate| {
        candidate.id != product.id
            && candidate.price.amount >= low
            && candidate.price.amount <= high
    });

    let mut seen: HashSet<ProductId> = HashSet::new();
    let mut similar: Vec<Product> = same_category
        .chain(similar_price)
        .filter(|candidate| seen.insert(candidate.id))
        .cloned()
        .collect();

    similar.sort_by(|a, b| b.rating.cmp(&a.rating));
    similar.truncate(limit);
    similar
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopease_core::{CurrencyCode, Price};

    use crate::storage::MemoryStorage;

    use super::*;

    fn product(id: i32, name: &str, cents: i64, category: &str, rating_tenths: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            category: category.to_string(),
            image: String::new(),
            description: String::new(),
            rating: Decimal::new(rating_tenths, 1),
            reviews: 10,
            in_stock: true,
            featured: false,
            discount: None,
        }
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_record_view_moves_repeat_to_front() {
        let mut tracker = RecentlyViewedTracker::new(Arc::new(MemoryStorage::new()));
        tracker.record_view(&product(1, "A", 1000, "X", 40));
        tracker.record_view(&product(2, "B", 1000, "X", 40));
        tracker.record_view(&product(1, "A", 1000, "X", 40));

        assert_eq!(ids(tracker.items()), vec![1, 2]);
    }

    #[test]
    fn test_list_is_bounded() {
        let mut tracker = RecentlyViewedTracker::new(Arc::new(MemoryStorage::new()));
        for id in 1..=10 {
            tracker.record_view(&product(id, "P", 1000, "X", 40));
        }

        assert_eq!(tracker.len(), MAX_RECENTLY_VIEWED);
        assert_eq!(ids(tracker.items()), vec![10, 9, 8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_list_survives_reconstruction() {
        let storage = Arc::new(MemoryStorage::new());

        let mut tracker = RecentlyViewedTracker::new(Arc::clone(&storage) as Arc<dyn KvStorage>);
        tracker.record_view(&product(1, "A", 1000, "X", 40));
        tracker.record_view(&product(2, "B", 1000, "X", 40));
        drop(tracker);

        let reloaded = RecentlyViewedTracker::new(storage);
        assert_eq!(ids(reloaded.items()), vec![2, 1]);
    }

    #[test]
    fn test_corrupt_payload_resets_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::RECENTLY_VIEWED, "not json at all").unwrap();

        let tracker = RecentlyViewedTracker::new(Arc::clone(&storage) as Arc<dyn KvStorage>);
        assert!(tracker.is_empty());
        // The unreadable payload is gone, not just ignored.
        assert_eq!(storage.get(keys::RECENTLY_VIEWED).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_stored_payload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut tracker = RecentlyViewedTracker::new(Arc::clone(&storage) as Arc<dyn KvStorage>);
        tracker.record_view(&product(1, "A", 1000, "X", 40));
        assert!(storage.get(keys::RECENTLY_VIEWED).unwrap().is_some());

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(storage.get(keys::RECENTLY_VIEWED).unwrap(), None);
    }

    #[test]
    fn test_similar_products_unions_category_and_price_band() {
        let anchor = product(1, "Anchor", 10000, "Electronics", 40);
        let catalog = vec![
            anchor.clone(),
            // Same category, far price.
            product(2, "Cheap Gadget", 500, "Electronics", 42),
            // Different category, price within 20%.
            product(3, "Pricey Mat", 9000, "Sports & Fitness", 48),
            // Neither.
            product(4, "Socks", 300, "Clothing", 49),
            // Both category and band: must appear once.
            product(5, "Speaker", 11000, "Electronics", 45),
        ];

        let similar = similar_products(&anchor, &catalog, SIMILAR_PRODUCTS_LIMIT);
        assert_eq!(ids(&similar), vec![3, 5, 2]);
    }

    #[test]
    fn test_similar_products_limit_and_self_exclusion() {
        let anchor = product(1, "Anchor", 10000, "Electronics", 40);
        let mut catalog = vec![anchor.clone()];
        for id in 2..=8 {
            catalog.push(product(id, "E", 10000, "Electronics", 30 + i64::from(id)));
        }

        let similar = similar_products(&anchor, &catalog, 4);
        assert_eq!(similar.len(), 4);
        assert!(similar.iter().all(|p| p.id != anchor.id));
        // Best rated first.
        assert_eq!(ids(&similar), vec![8, 7, 6, 5]);
    }
}
