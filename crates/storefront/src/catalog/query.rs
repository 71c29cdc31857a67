//! Pure derivation of the visible product list.

use std::cmp::Ordering;

use shopease_core::Product;

use super::filters::{FilterState, SortBy, SortOrder};

/// Compute the filtered and sorted catalog view.
///
/// Pure over its inputs and recomputed on every call, so the view can never
/// go stale. The sort is stable: products that compare equal keep their
/// catalog order. An unsatisfiable filter combination yields an empty list,
/// never an error.
#[must_use]
pub fn visible_products(products: &[Product], filters: &FilterState) -> Vec<Product> {
    let needle = filters.search.trim().to_lowercase();

    let mut visible: Vec<Product> = products
        .iter()
        .filter(|product| matches(product, filters, &needle))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ordering = compare(a, b, filters.sort_by);
        match filters.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    visible
}

/// Whether a product passes every active filter. `needle` is the
/// pre-lowercased search text.
fn matches(product: &Product, filters: &FilterState, needle: &str) -> bool {
    if !filters.category.is_empty() && product.category != filters.category {
        return false;
    }

    if !needle.is_empty()
        && !product.name.to_lowercase().contains(needle)
        && !product.category.to_lowercase().contains(needle)
    {
        return false;
    }

    let (min, max) = filters.price_range;
    if product.price.amount < min || product.price.amount > max {
        return false;
    }

    if let Some(threshold) = filters.rating {
        if product.rating < threshold {
            return false;
        }
    }

    if filters.in_stock && !product.in_stock {
        return false;
    }

    if filters.featured && !product.featured {
        return false;
    }

    true
}

/// Primary ordering for a sort key. `Date` treats every pair as equal so
/// the stable sort preserves catalog order.
fn compare(a: &Product, b: &Product, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => a.name.cmp(&b.name),
        SortBy::PriceLow => a.price.amount.cmp(&b.price.amount),
        SortBy::PriceHigh => b.price.amount.cmp(&a.price.amount),
        SortBy::Rating => b.rating.cmp(&a.rating),
        SortBy::Reviews => b.reviews.cmp(&a.reviews),
        SortBy::Date => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;
    use shopease_core::{CurrencyCode, Price, ProductId};

    use super::super::filters::FilterUpdate;
    use super::*;

    fn product(id: i32, name: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            category: category.to_string(),
            image: String::new(),
            description: String::new(),
            rating: Decimal::new(40, 1),
            reviews: 10,
            in_stock: true,
            featured: false,
            discount: None,
        }
    }

    fn fixture() -> Vec<Product> {
        let mut headphones = product(1, "Wireless Headphones", 9999, "Electronics");
        headphones.rating = Decimal::new(45, 1);
        headphones.reviews = 128;
        headphones.featured = true;

        let mut shirt = product(2, "Cotton T-Shirt", 2999, "Clothing");
        shirt.rating = Decimal::new(43, 1);
        shirt.reviews = 67;

        let mut watch = product(3, "Fitness Watch", 19999, "Electronics");
        watch.rating = Decimal::new(47, 1);
        watch.reviews = 89;
        watch.in_stock = false;

        let mut coffee = product(4, "Coffee Beans", 2499, "Food & Beverage");
        coffee.rating = Decimal::new(48, 1);
        coffee.reviews = 156;

        vec![headphones, shirt, watch, coffee]
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_default_filters_keep_everything_sorted_by_name() {
        let visible = visible_products(&fixture(), &FilterState::default());
        assert_eq!(ids(&visible), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            category: Some("Electronics".to_string()),
            ..Default::default()
        });
        let visible = visible_products(&fixture(), &filters);
        assert_eq!(ids(&visible), vec![3, 1]);

        filters.apply(FilterUpdate {
            category: Some("electronics".to_string()),
            ..Default::default()
        });
        assert!(visible_products(&fixture(), &filters).is_empty());
    }

    #[test]
    fn test_search_matches_name_and_category_case_insensitively() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            search: Some("WATCH".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![3]);

        filters.apply(FilterUpdate {
            search: Some("beverage".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![4]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            price_range: Some((Decimal::new(2999, 2), Decimal::new(9999, 2))),
            ..Default::default()
        });
        let visible = visible_products(&fixture(), &filters);
        assert_eq!(ids(&visible), vec![2, 1]);
    }

    #[test]
    fn test_rating_threshold() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            rating: Some(Some(Decimal::new(45, 1))),
            ..Default::default()
        });
        let visible = visible_products(&fixture(), &filters);
        assert_eq!(ids(&visible), vec![4, 3, 1]);
    }

    #[test]
    fn test_stock_and_featured_flags() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            in_stock: Some(true),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![4, 2, 1]);

        filters.apply(FilterUpdate {
            featured: Some(true),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![1]);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::PriceLow),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![4, 2, 1, 3]);

        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::PriceHigh),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_order_desc_reverses_primary_direction() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::PriceLow),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_by_rating_and_reviews_descending() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::Rating),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![4, 3, 1, 2]);

        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::Reviews),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_date_sort_keeps_catalog_order_and_ties_are_stable() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::Date),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&fixture(), &filters)), vec![1, 2, 3, 4]);

        // Equal prices tie under a price sort and keep catalog order.
        let mut products = fixture();
        products[2].price = products[0].price;
        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::PriceLow),
            ..Default::default()
        });
        assert_eq!(ids(&visible_products(&products, &filters)), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_unsatisfiable_combination_is_empty_not_error() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            category: Some("Clothing".to_string()),
            search: Some("coffee".to_string()),
            ..Default::default()
        });
        assert!(visible_products(&fixture(), &filters).is_empty());
    }

    #[test]
    fn test_source_slice_is_untouched() {
        let products = fixture();
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            sort_by: Some(SortBy::PriceHigh),
            ..Default::default()
        });
        let _ = visible_products(&products, &filters);
        assert_eq!(ids(&products), vec![1, 2, 3, 4]);
    }
}
