//! Product catalog types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product in the catalog.
///
/// Read-only reference data: stores never mutate products, they only hold
/// and snapshot them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current list price.
    pub price: Price,
    /// Category label (one of the catalog's category list).
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Full description for listings and search.
    pub description: String,
    /// Average review rating in `[0, 5]`.
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Whether the product is featured on the home page.
    pub featured: bool,
    /// Optional explicit discount percent in `[0, 100]`.
    ///
    /// Always supplied by whoever decides the promotion; nothing in the
    /// state layer invents a discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Snapshot the fields presentation surfaces carry around (wishlist
    /// entries, product cards).
    #[must_use]
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            category: self.category.clone(),
            rating: self.rating,
        }
    }
}

/// The slice of a [`Product`] that gets snapshotted outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// List price at snapshot time.
    pub price: Price,
    /// Image URI.
    pub image: String,
    /// Category label.
    pub category: String,
    /// Average review rating.
    pub rating: Decimal,
}
