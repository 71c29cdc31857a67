//! Scripted shopping session exercising every store.
//!
//! The session mirrors what the presentation layer would do: consult the
//! simulated services, then drive the stores with the results. Demo
//! discounts are drawn here with `rand` and passed into the pricing calls
//! explicitly; no store invents a discount on its own.

use rand::Rng;
use shopease_core::ProductId;
use shopease_storefront::catalog::data;
use shopease_storefront::config::StorefrontConfig;
use shopease_storefront::pricing;
use shopease_storefront::recently_viewed::{SIMILAR_PRODUCTS_LIMIT, similar_products};
use shopease_storefront::services::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use shopease_storefront::state::StorefrontState;

/// Run the scripted session.
///
/// # Errors
///
/// Returns an error if configuration loading or the mock login fails.
#[allow(clippy::print_stdout, clippy::too_many_lines)]
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = StorefrontState::new(&config);
    state.load_demo_catalog();

    println!("== Sign in ==");
    state.auth.login_start();
    match state.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).await {
        Ok(user) => state.auth.login_succeeded(user),
        Err(e) => {
            state.auth.login_failed(e.to_string());
            return Err(e.into());
        }
    }
    let shopper = state.auth.user().map(|u| u.name.clone()).unwrap_or_default();
    println!("Signed in as {shopper}\n");

    println!("== Browsing ==");
    let headphones = find(&state, 1)?;
    let watch = find(&state, 2)?;
    let coffee = find(&state, 4)?;

    for product in [&headphones, &watch, &coffee] {
        state.recently_viewed.record_view(product);
        println!("Viewed {} ({})", product.name, product.price.display());
    }

    let similar = similar_products(&watch, state.catalog.products(), SIMILAR_PRODUCTS_LIMIT);
    println!("Shoppers who viewed {} also looked at:", watch.name);
    for product in &similar {
        println!("  - {} ({} stars)", product.name, product.rating);
    }
    println!();

    println!("== Cart ==");
    // Product-card demo discount: drawn here, applied before the price
    // reaches the cart.
    let discount_percent = rand::rng().random_range(10..=30_u8);
    let sale_price = pricing::apply_discount(headphones.price, discount_percent);
    println!(
        "{} is {discount_percent}% off today: {} -> {}",
        headphones.name,
        headphones.price.display(),
        sale_price.display()
    );

    state.cart.add_to_cart(&headphones.summary(), sale_price);
    state
        .cart
        .add_to_cart_with_quantity(&coffee.summary(), coffee.price, 2);
    state.cart.update_quantity(coffee.id, 3);

    for line in state.cart.lines() {
        println!(
            "  {} x{} @ {} = {}",
            line.name,
            line.quantity,
            line.unit_price.display(),
            line.line_total().display()
        );
    }
    println!(
        "{} items, subtotal {}\n",
        state.cart.item_count(),
        state.cart.total().display()
    );

    println!("== Wishlist ==");
    state.wishlist.toggle(&watch.summary());
    println!("Wishlisted {}", watch.name);
    state.wishlist.toggle(&watch.summary());
    state.wishlist.add(&watch.summary());
    println!("{} item(s) on the wishlist\n", state.wishlist.len());

    println!("== Premium ==");
    println!(
        "Joining ShopEase Premium ({}/year)...",
        pricing::PREMIUM_ANNUAL_PRICE.display()
    );
    let membership_service = &state.membership_service;
    membership_service.subscribe(&mut state.membership).await;

    let subtotal = state.cart.total();
    let premium_subtotal = pricing::premium_price(subtotal);
    let saved = subtotal.amount - premium_subtotal.amount;
    state.membership.add_savings(saved);
    println!(
        "Member since {}; 5% off brings the subtotal to {} (saved {})",
        state
            .membership
            .state()
            .member_since
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        premium_subtotal.display(),
        shopease_core::Price::new(saved, subtotal.currency_code).display()
    );
    println!(
        "Savings this year: {}\n",
        shopease_core::Price::new(state.membership.savings_this_year(), subtotal.currency_code)
            .display()
    );

    println!("== Checkout ==");
    let shipping = pricing::shipping_cost(premium_subtotal);
    let total = pricing::order_total(premium_subtotal);
    match pricing::amount_until_free_shipping(premium_subtotal) {
        None => println!("Free shipping!"),
        Some(gap) => println!(
            "Spend {} more for free shipping",
            shopease_core::Price::new(gap, subtotal.currency_code).display()
        ),
    }
    println!(
        "Subtotal {}  Shipping {}  Total {}",
        premium_subtotal.display(),
        shipping.display(),
        total.display()
    );

    state.auth.logout();
    println!("\nSigned out. Recently-viewed and theme survive in {:?}.", config.data_dir);

    Ok(())
}

/// Fetch a demo product by id.
fn find(
    state: &StorefrontState,
    id: i32,
) -> Result<shopease_core::Product, Box<dyn std::error::Error>> {
    data::product_by_id(state.catalog.products(), ProductId::new(id))
        .cloned()
        .ok_or_else(|| format!("demo product {id} missing from catalog").into())
}
