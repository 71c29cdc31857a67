//! Filter and sort configuration for the catalog view.

use rust_decimal::Decimal;

/// Sort key for the catalog view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Lexicographic by product name.
    #[default]
    Name,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Rating descending.
    Rating,
    /// Review count descending.
    Reviews,
    /// Catalog order (newest data first as supplied).
    Date,
}

impl SortBy {
    /// Parse from a stored or user-supplied value. Unknown values fall back
    /// to the default.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "reviews" => Self::Reviews,
            "date" => Self::Date,
            _ => Self::Name,
        }
    }

    /// Convert to the stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::Date => "date",
        }
    }
}

/// Direction applied on top of the sort key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    /// Reverses the primary direction of the sort key.
    Desc,
}

impl SortOrder {
    /// Parse from a stored or user-supplied value. Unknown values fall back
    /// to ascending.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Convert to the stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Active filter and sort configuration.
///
/// The `brands`, `categories` and `ratings` selections are carried for the
/// filter panel but do not narrow the query; `category`, `search`,
/// `price_range`, `rating`, `in_stock` and `featured` do.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Case-insensitive text matched against product name and category.
    pub search: String,
    /// Exact category label; empty matches any.
    pub category: String,
    /// Inclusive price bounds. Kept ordered: min never exceeds max.
    pub price_range: (Decimal, Decimal),
    /// Minimum rating threshold; `None` admits any rating.
    pub rating: Option<Decimal>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// When set, only in-stock products pass.
    pub in_stock: bool,
    /// When set, only featured products pass.
    pub featured: bool,
    /// Brand selections from the filter panel.
    pub brands: Vec<String>,
    /// Category multi-selections from the filter panel.
    pub categories: Vec<String>,
    /// Star-rating selections from the filter panel.
    pub ratings: Vec<u8>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            price_range: (Decimal::ZERO, Decimal::new(1000, 0)),
            rating: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            in_stock: false,
            featured: false,
            brands: Vec::new(),
            categories: Vec::new(),
            ratings: Vec::new(),
        }
    }
}

impl FilterState {
    /// Merge a partial update into the current state. Fields left as `None`
    /// keep their previous value. An inverted price range is reordered
    /// rather than rejected.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(brands) = update.brands {
            self.brands = brands;
        }
        if let Some(categories) = update.categories {
            self.categories = categories;
        }
        if let Some(ratings) = update.ratings {
            self.ratings = ratings;
        }

        if self.price_range.0 > self.price_range.1 {
            self.price_range = (self.price_range.1, self.price_range.0);
        }
    }
}

/// Partial update for [`FilterState`]. Every field is optional; `None`
/// leaves the corresponding filter untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub category: Option<String>,
    pub price_range: Option<(Decimal, Decimal)>,
    /// `Some(None)` clears the rating threshold.
    pub rating: Option<Option<Decimal>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
    pub brands: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub ratings: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_parse_roundtrip() {
        for sort in [
            SortBy::Name,
            SortBy::PriceLow,
            SortBy::PriceHigh,
            SortBy::Rating,
            SortBy::Reviews,
            SortBy::Date,
        ] {
            assert_eq!(SortBy::parse(sort.as_str()), sort);
        }
    }

    #[test]
    fn test_sort_by_parse_unknown_falls_back() {
        assert_eq!(SortBy::parse("popularity"), SortBy::Name);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }

    #[test]
    fn test_default_filter_state() {
        let filters = FilterState::default();
        assert!(filters.search.is_empty());
        assert!(filters.category.is_empty());
        assert_eq!(filters.price_range, (Decimal::ZERO, Decimal::new(1000, 0)));
        assert_eq!(filters.rating, None);
        assert_eq!(filters.sort_by, SortBy::Name);
        assert_eq!(filters.sort_order, SortOrder::Asc);
        assert!(!filters.in_stock);
        assert!(!filters.featured);
    }

    #[test]
    fn test_apply_merges_only_given_fields() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            search: Some("coffee".to_string()),
            ..Default::default()
        });
        filters.apply(FilterUpdate {
            category: Some("Electronics".to_string()),
            ..Default::default()
        });

        assert_eq!(filters.search, "coffee");
        assert_eq!(filters.category, "Electronics");
        assert_eq!(filters.sort_by, SortBy::Name);
    }

    #[test]
    fn test_apply_reorders_inverted_price_range() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            price_range: Some((Decimal::new(500, 0), Decimal::new(100, 0))),
            ..Default::default()
        });
        assert_eq!(
            filters.price_range,
            (Decimal::new(100, 0), Decimal::new(500, 0))
        );
    }

    #[test]
    fn test_apply_clears_rating_threshold() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            rating: Some(Some(Decimal::new(4, 0))),
            ..Default::default()
        });
        assert_eq!(filters.rating, Some(Decimal::new(4, 0)));

        filters.apply(FilterUpdate {
            rating: Some(None),
            ..Default::default()
        });
        assert_eq!(filters.rating, None);
    }
}
