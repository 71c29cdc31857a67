//! Wishlist state.
//!
//! Holds product snapshots keyed by product id, plus the open/closed flag
//! for the wishlist drawer. `toggle` is the primary operation; `add` and
//! `remove` are its idempotent one-direction halves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shopease_core::{Price, ProductId, ProductSummary};

use crate::observe::{Subscribers, SubscriptionId};

/// A wishlisted product snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub rating: Decimal,
    /// When the product was wishlisted.
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    fn from_summary(product: &ProductSummary) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            rating: product.rating,
            added_at: Utc::now(),
        }
    }
}

/// Wishlist state: entries in insertion order plus the drawer flag.
#[derive(Debug, Default)]
pub struct WishlistStore {
    entries: Vec<WishlistEntry>,
    is_open: bool,
    subscribers: Subscribers,
}

impl WishlistStore {
    /// Create an empty wishlist with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ====== Mutations ======

    /// Add a product if it is not already wishlisted. Re-adding is a no-op
    /// and keeps the original `added_at`.
    pub fn add(&mut self, product: &ProductSummary) {
        if self.contains(product.id) {
            return;
        }
        self.entries.push(WishlistEntry::from_summary(product));
        self.subscribers.notify();
    }

    /// Remove a product if present; an absent id is a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.product_id != product_id);
        if self.entries.len() != before {
            self.subscribers.notify();
        }
    }

    /// Remove the product if wishlisted, otherwise add it.
    pub fn toggle(&mut self, product: &ProductSummary) {
        if self.contains(product.id) {
            self.entries.retain(|entry| entry.product_id != product.id);
        } else {
            self.entries.push(WishlistEntry::from_summary(product));
        }
        self.subscribers.notify();
    }

    /// Empty the wishlist. The drawer flag is untouched.
    pub fn clear(&mut self) {
        tracing::debug!(entries = self.entries.len(), "Clearing wishlist");
        self.entries.clear();
        self.subscribers.notify();
    }

    /// Flip the drawer open/closed.
    pub fn toggle_drawer(&mut self) {
        self.is_open = !self.is_open;
        self.subscribers.notify();
    }

    /// Set the drawer state directly.
    pub fn set_drawer_open(&mut self, open: bool) {
        self.is_open = open;
        self.subscribers.notify();
    }

    // ====== Queries ======

    /// Whether a product is wishlisted.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.product_id == product_id)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
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
