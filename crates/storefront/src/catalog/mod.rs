//! Catalog state and the derived product view.
//!
//! [`CatalogStore`] owns the product collection, category labels, fetch
//! status and the active [`FilterState`]. The visible product list is
//! derived by [`visible_products`], a pure function recomputed on every
//! call; nothing in this module caches a derived view.

pub mod data;
mod filters;
mod query;

use shopease_core::Product;

pub use filters::{FilterState, FilterUpdate, SortBy, SortOrder};
pub use query::visible_products;

use crate::observe::{Subscribers, SubscriptionId};

/// Catalog state: products, categories, fetch status and filters.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
    loading: bool,
    error: Option<String>,
    filters: FilterState,
    subscribers: Subscribers,
}

impl CatalogStore {
    /// Create an empty store with default filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ====== Mutations ======

    /// Replace the product collection verbatim.
    pub fn set_products(&mut self, products: Vec<Product>) {
        tracing::debug!(count = products.len(), "Replacing product collection");
        self.products = products;
        self.subscribers.notify();
    }

    /// Replace the category labels.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
        self.subscribers.notify();
    }

    /// Update the fetch-in-progress flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.subscribers.notify();
    }

    /// Record or clear the last fetch error.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.subscribers.notify();
    }

    /// Shallow-merge a partial filter update.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.subscribers.notify();
    }

    /// Reset all filters to their defaults.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.subscribers.notify();
    }

    // ====== Queries ======

    /// The full product collection in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category labels for the picker.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether a fetch is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last fetch error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The active filter configuration.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The filtered and sorted product view.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        visible_products(&self.products, &self.filters)
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
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_set_products_replaces_collection() {
        let mut store = CatalogStore::new();
        assert!(store.products().is_empty());

        store.set_products(data::demo_products());
        assert_eq!(store.products().len(), 12);

        store.set_products(Vec::new());
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_fetch_status_flags() {
        let mut store = CatalogStore::new();
        store.set_loading(true);
        assert!(store.is_loading());

        store.set_error(Some("network unreachable".to_string()));
        assert_eq!(store.error(), Some("network unreachable"));

        store.set_error(None);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_clear_filters_resets_to_defaults() {
        let mut store = CatalogStore::new();
        store.set_filters(FilterUpdate {
            search: Some("watch".to_string()),
            sort_by: Some(SortBy::PriceHigh),
            ..Default::default()
        });
        assert_eq!(store.filters().search, "watch");

        store.clear_filters();
        assert_eq!(store.filters(), &FilterState::default());
    }

    #[test]
    fn test_visible_products_follows_filters() {
        let mut store = CatalogStore::new();
        store.set_products(data::demo_products());
        assert_eq!(store.visible_products().len(), 12);

        store.set_filters(FilterUpdate {
            category: Some("Clothing".to_string()),
            ..Default::default()
        });
        assert_eq!(store.visible_products().len(), 2);
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let mut store = CatalogStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let id = {
            let calls = Arc::clone(&calls);
            store.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        store.set_loading(true);
        store.set_products(data::demo_products());
        store.clear_filters();
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        assert!(store.unsubscribe(id));
        store.set_loading(false);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
