//! Browse the demo catalog with filters.
//!
//! # Usage
//!
//! ```bash
//! shopease browse --category Electronics --sort price-low
//! shopease browse --search coffee --featured
//! ```

use rust_decimal::Decimal;

use shopease_storefront::catalog::{CatalogStore, FilterUpdate, SortBy, SortOrder, data};

/// Filter flags collected from the command line.
#[derive(Debug, Default)]
pub struct BrowseFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub rating: Option<Decimal>,
    pub in_stock: bool,
    pub featured: bool,
    pub sort: String,
    pub order: String,
}

impl BrowseFilters {
    fn to_update(&self) -> FilterUpdate {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => Some((
                min.unwrap_or(Decimal::ZERO),
                max.unwrap_or_else(|| Decimal::new(1000, 0)),
            )),
        };

        FilterUpdate {
            search: self.search.clone(),
            category: self.category.clone(),
            price_range,
            rating: self.rating.map(Some),
            sort_by: Some(SortBy::parse(&self.sort)),
            sort_order: Some(SortOrder::parse(&self.order)),
            in_stock: Some(self.in_stock),
            featured: Some(self.featured),
            ..Default::default()
        }
    }
}

/// Print the filtered and sorted catalog view.
///
/// # Errors
///
/// Never fails today; the signature matches the other commands.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn browse(filters: &BrowseFilters) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = CatalogStore::new();
    catalog.set_products(data::demo_products());
    catalog.set_categories(data::demo_categories());
    catalog.set_filters(filters.to_update());

    let visible = catalog.visible_products();
    tracing::debug!(matches = visible.len(), "Computed catalog view");

    if visible.is_empty() {
        println!("No products match the given filters.");
        return Ok(());
    }

    println!(
        "{:>3}  {:<32} {:>9}  {:<17} {:>6}  {:>7}  {}",
        "ID", "NAME", "PRICE", "CATEGORY", "RATING", "REVIEWS", "FLAGS"
    );
    for product in &visible {
        let mut flags = Vec::new();
        if product.featured {
            flags.push("featured");
        }
        if !product.in_stock {
            flags.push("out-of-stock");
        }
        println!(
            "{:>3}  {:<32} {:>9}  {:<17} {:>6}  {:>7}  {}",
            product.id,
            product.name,
            product.price.display(),
            product.category,
            product.rating,
            product.reviews,
            flags.join(", ")
        );
    }
    println!("\n{} of 12 products shown", visible.len());

    Ok(())
}
