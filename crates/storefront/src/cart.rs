//! Shopping cart state.
//!
//! Each line captures the unit price at the moment it was added; later
//! catalog or promotion changes never reprice an existing line. Totals are
//! recomputed from the lines on every call.

use rust_decimal::Decimal;
use shopease_core::{CurrencyCode, Price, ProductId, ProductSummary};

use crate::observe::{Subscribers, SubscriptionId};

/// One cart line: a product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price captured when the line was first added.
    pub unit_price: Price,
    pub image: String,
    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.unit_price.amount * Decimal::from(self.quantity),
            self.unit_price.currency_code,
        )
    }
}

/// Cart state: an ordered list of lines, at most one per product.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    subscribers: Subscribers,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ====== Mutations ======

    /// Add one unit of a product at the given unit price.
    ///
    /// If the product is already in the cart its quantity is incremented
    /// and the original price snapshot is kept; `unit_price` only matters
    /// for the first add.
    pub fn add_to_cart(&mut self, product: &ProductSummary, unit_price: Price) {
        self.add_to_cart_with_quantity(product, unit_price, 1);
    }

    /// Add a product with an explicit quantity. A quantity of zero is
    /// treated as one, matching the single-unit add.
    pub fn add_to_cart_with_quantity(
        &mut self,
        product: &ProductSummary,
        unit_price: Price,
        quantity: u32,
    ) {
        let quantity = quantity.max(1);

        if let Some(line) = self.line_mut(product.id) {
            line.quantity += quantity;
        } else {
            tracing::debug!(product_id = %product.id, "Adding product to cart");
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price,
                image: product.image.clone(),
                quantity,
            });
        }
        self.subscribers.notify();
    }

    /// Set the quantity of an existing line. Zero removes the line; an
    /// absent product id is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
            self.subscribers.notify();
        }
    }

    /// Remove a line if present; an absent product id is a no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        if self.lines.len() != before {
            self.subscribers.notify();
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        tracing::debug!(lines = self.lines.len(), "Clearing cart");
        self.lines.clear();
        self.subscribers.notify();
    }

    // ====== Queries ======

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of all line totals. The currency follows the first line; an
    /// empty cart totals zero USD.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::USD, |line| line.unit_price.currency_code);
        let amount = self
            .lines
            .iter()
            .map(|line| line.line_total().amount)
            .sum();
        Price::new(amount, currency)
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

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}
