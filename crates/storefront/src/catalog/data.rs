//! Built-in demo catalog.
//!
//! The storefront ships with a small fixed catalog so the whole stack can
//! run without a backend. Lookup helpers operate on any product slice, not
//! just this one.

use rust_decimal::Decimal;
use shopease_core::{CurrencyCode, Price, Product, ProductId};

struct DemoRow {
    id: i32,
    name: &'static str,
    cents: i64,
    category: &'static str,
    image: &'static str,
    description: &'static str,
    rating_tenths: i64,
    reviews: u32,
    featured: bool,
}

const DEMO_ROWS: &[DemoRow] = &[
    DemoRow {
        id: 1,
        name: "Wireless Bluetooth Headphones",
        cents: 9999,
        category: "Electronics",
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop",
        description: "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
        rating_tenths: 45,
        reviews: 128,
        featured: true,
    },
    DemoRow {
        id: 2,
        name: "Smart Fitness Watch",
        cents: 19999,
        category: "Electronics",
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500&h=500&fit=crop",
        description: "Advanced fitness tracking with heart rate monitor, GPS, and water resistance.",
        rating_tenths: 47,
        reviews: 89,
        featured: true,
    },
    DemoRow {
        id: 3,
        name: "Organic Cotton T-Shirt",
        cents: 2999,
        category: "Clothing",
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500&h=500&fit=crop",
        description: "Comfortable organic cotton t-shirt in various colors and sizes.",
        rating_tenths: 43,
        reviews: 67,
        featured: false,
    },
    DemoRow {
        id: 4,
        name: "Premium Coffee Beans",
        cents: 2499,
        category: "Food & Beverage",
        image: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=500&h=500&fit=crop",
        description: "Single-origin coffee beans roasted to perfection for the ultimate coffee experience.",
        rating_tenths: 48,
        reviews: 156,
        featured: true,
    },
    DemoRow {
        id: 5,
        name: "Leather Backpack",
        cents: 14999,
        category: "Accessories",
        image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop",
        description: "Durable leather backpack with multiple compartments and laptop sleeve.",
        rating_tenths: 46,
        reviews: 94,
        featured: false,
    },
    DemoRow {
        id: 6,
        name: "Wireless Charging Pad",
        cents: 3999,
        category: "Electronics",
        image: "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=500&h=500&fit=crop",
        description: "Fast wireless charging pad compatible with all Qi-enabled devices.",
        rating_tenths: 44,
        reviews: 73,
        featured: false,
    },
    DemoRow {
        id: 7,
        name: "Yoga Mat",
        cents: 4999,
        category: "Sports & Fitness",
        image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=500&h=500&fit=crop",
        description: "Non-slip yoga mat with excellent grip and cushioning for all yoga practices.",
        rating_tenths: 45,
        reviews: 112,
        featured: false,
    },
    DemoRow {
        id: 8,
        name: "Ceramic Dinner Set",
        cents: 7999,
        category: "Home & Kitchen",
        image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=500&h=500&fit=crop",
        description: "Beautiful ceramic dinner set for 4 people with modern design.",
        rating_tenths: 47,
        reviews: 45,
        featured: false,
    },
    DemoRow {
        id: 9,
        name: "Bluetooth Speaker",
        cents: 7999,
        category: "Electronics",
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500&h=500&fit=crop",
        description: "Portable Bluetooth speaker with 360-degree sound and waterproof design.",
        rating_tenths: 46,
        reviews: 87,
        featured: true,
    },
    DemoRow {
        id: 10,
        name: "Running Shoes",
        cents: 12999,
        category: "Sports & Fitness",
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500&h=500&fit=crop",
        description: "Lightweight running shoes with advanced cushioning and breathable material.",
        rating_tenths: 48,
        reviews: 203,
        featured: false,
    },
    DemoRow {
        id: 11,
        name: "Essential Oil Diffuser",
        cents: 3499,
        category: "Home & Kitchen",
        image: "https://images.unsplash.com/photo-1608571423902-eed4a5ad8108?w=500&h=500&fit=crop",
        description: "Ultrasonic essential oil diffuser with LED lights and timer function.",
        rating_tenths: 44,
        reviews: 56,
        featured: false,
    },
    DemoRow {
        id: 12,
        name: "Denim Jacket",
        cents: 8999,
        category: "Clothing",
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500&h=500&fit=crop",
        description: "Classic denim jacket with vintage wash and comfortable fit.",
        rating_tenths: 45,
        reviews: 78,
        featured: false,
    },
];

/// The demo product catalog.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    DEMO_ROWS
        .iter()
        .map(|row| Product {
            id: ProductId::new(row.id),
            name: row.name.to_string(),
            price: Price::new(Decimal::new(row.cents, 2), CurrencyCode::USD),
            category: row.category.to_string(),
            image: row.image.to_string(),
            description: row.description.to_string(),
            rating: Decimal::new(row.rating_tenths, 1),
            reviews: row.reviews,
            in_stock: true,
            featured: row.featured,
            discount: None,
        })
        .collect()
}

/// Category labels shown in the category picker. `All` comes first and is
/// not a real category; `products_by_category` treats it as "no filter".
#[must_use]
pub fn demo_categories() -> Vec<String> {
    [
        "All",
        "Electronics",
        "Clothing",
        "Food & Beverage",
        "Accessories",
        "Sports & Fitness",
        "Home & Kitchen",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Look up a product by id.
#[must_use]
pub fn product_by_id(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}

/// Products in a category; the label `All` returns everything.
#[must_use]
pub fn products_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    if category == "All" {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| product.category == category)
        .collect()
}

/// Case-insensitive text search over name, category and description.
#[must_use]
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Products flagged as featured, in catalog order.
#[must_use]
pub fn featured_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|product| product.featured).collect()
}
