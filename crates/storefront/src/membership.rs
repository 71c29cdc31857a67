//! Premium membership state.
//!
//! Activation stamps the member-since time and a renewal date one calendar
//! year later. The 5% premium discount itself is a pricing policy value;
//! this store only tracks membership status and accumulated savings.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use crate::observe::{Subscribers, SubscriptionId};

/// A membership perk shown on the premium page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon identifier consumed by the presentation layer.
    pub icon: &'static str,
}

/// The fixed premium benefit catalog.
pub const PREMIUM_BENEFITS: &[Benefit] = &[
    Benefit {
        id: 1,
        title: "Free Next-Day Delivery",
        description: "Get your items delivered the next day at no extra cost",
        icon: "Truck",
    },
    Benefit {
        id: 2,
        title: "Exclusive Deals",
        description: "Access to member-only deals and early sale access",
        icon: "Tag",
    },
    Benefit {
        id: 3,
        title: "Premium Support",
        description: "24/7 priority customer support",
        icon: "Headphones",
    },
    Benefit {
        id: 4,
        title: "Special Discounts",
        description: "Additional 5% off on all purchases",
        icon: "Percent",
    },
];

/// Membership status snapshot.
///
/// `member_since` and `next_renewal` are `Some` exactly when `is_premium`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipState {
    pub is_premium: bool,
    pub member_since: Option<DateTime<Utc>>,
    pub next_renewal: Option<DateTime<Utc>>,
    pub savings_this_year: Decimal,
}

/// Premium membership state and savings tally.
#[derive(Debug, Default)]
pub struct MembershipStore {
    state: MembershipState,
    subscribers: Subscribers,
}

impl MembershipStore {
    /// Create a store for a non-member.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ====== Mutations ======

    /// Activate premium membership as of now.
    ///
    /// The renewal lands one calendar year later; a Feb 29 start clamps to
    /// Feb 28. Re-activating restamps both dates.
    pub fn activate_premium(&mut self) {
        let now = Utc::now();
        // None only at the far end of chrono's calendar range.
        let next_renewal = now.checked_add_months(Months::new(12)).unwrap_or(now);

        tracing::info!(next_renewal = %next_renewal, "Premium membership activated");
        self.state.is_premium = true;
        self.state.member_since = Some(now);
        self.state.next_renewal = Some(next_renewal);
        self.subscribers.notify();
    }

    /// Drop back to a non-member, resetting the savings tally.
    pub fn deactivate_premium(&mut self) {
        tracing::info!("Premium membership deactivated");
        self.state = MembershipState::default();
        self.subscribers.notify();
    }

    /// Accumulate savings attributed to membership. Negative amounts are
    /// accepted and reduce the tally (refunds).
    pub fn add_savings(&mut self, amount: Decimal) {
        self.state.savings_this_year += amount;
        self.subscribers.notify();
    }

    // ====== Queries ======

    /// Current membership snapshot.
    #[must_use]
    pub const fn state(&self) -> &MembershipState {
        &self.state
    }

    /// Whether the shopper is a premium member.
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.state.is_premium
    }

    /// Savings accumulated this membership year.
    #[must_use]
    pub const fn savings_this_year(&self) -> Decimal {
        self.state.savings_this_year
    }

    /// The static benefit catalog.
    #[must_use]
    pub const fn benefits() -> &'static [Benefit] {
        PREMIUM_BENEFITS
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
