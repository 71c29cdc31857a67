//! Mocked premium subscription payment.

use std::time::Duration;

use crate::membership::MembershipStore;

/// Simulated payment processor for the premium program.
///
/// `subscribe` always succeeds after the configured latency; there is no
/// real charge and no failure path to model.
#[derive(Debug)]
pub struct MembershipService {
    latency: Duration,
}

impl MembershipService {
    /// Create a service that sleeps `latency` before confirming payment.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Process the annual subscription payment, then activate premium on
    /// the store.
    pub async fn subscribe(&self, store: &mut MembershipStore) {
        tracing::debug!(latency_ms = self.latency.as_millis(), "Processing subscription payment");
        tokio::time::sleep(self.latency).await;
        store.activate_premium();
    }
}
