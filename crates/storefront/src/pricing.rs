//! Pricing policy: discounts, shipping and the premium program price.
//!
//! Pure functions over [`Price`] values. Stores never call into this
//! module on their own; callers compute discounted prices first and pass
//! the results in (the cart snapshots whatever unit price it is given).

use rust_decimal::{Decimal, RoundingStrategy};
use shopease_core::Price;

/// Discount applied to every purchase for premium members, in percent.
pub const PREMIUM_DISCOUNT_PERCENT: u8 = 5;

/// Annual price of the premium membership.
pub const PREMIUM_ANNUAL_PRICE: Price = Price::usd(Decimal::from_parts(99, 0, 0, false, 0));

/// Subtotals strictly above this ship for free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Flat shipping rate below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

const PERCENT_SCALE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Apply a percentage discount, rounding half-up to whole cents.
/// Percentages above 100 clamp to 100 (a free item, never a negative price).
#[must_use]
pub fn apply_discount(price: Price, percent: u8) -> Price {
    let percent = Decimal::from(u32::from(percent.min(100)));
    let factor = (PERCENT_SCALE - percent) / PERCENT_SCALE;
    let amount = (price.amount * factor)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Price::new(amount, price.currency_code)
}

/// The price a premium member pays.
#[must_use]
pub fn premium_price(price: Price) -> Price {
    apply_discount(price, PREMIUM_DISCOUNT_PERCENT)
}

/// Shipping cost for a cart subtotal: free strictly above the threshold,
/// otherwise the flat rate. An exact-threshold subtotal still pays shipping.
#[must_use]
pub fn shipping_cost(subtotal: Price) -> Price {
    if subtotal.amount > FREE_SHIPPING_THRESHOLD {
        Price::new(Decimal::ZERO, subtotal.currency_code)
    } else {
        Price::new(FLAT_SHIPPING_RATE, subtotal.currency_code)
    }
}

/// How much more the shopper must spend to reach free shipping, or `None`
/// once shipping is already free.
#[must_use]
pub fn amount_until_free_shipping(subtotal: Price) -> Option<Decimal> {
    if subtotal.amount > FREE_SHIPPING_THRESHOLD {
        None
    } else {
        Some(FREE_SHIPPING_THRESHOLD - subtotal.amount)
    }
}

/// Subtotal plus shipping.
#[must_use]
pub fn order_total(subtotal: Price) -> Price {
    let shipping = shipping_cost(subtotal);
    Price::new(subtotal.amount + shipping.amount, subtotal.currency_code)
}
