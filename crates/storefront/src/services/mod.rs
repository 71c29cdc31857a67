//! Simulated backend services.
//!
//! The storefront has no real backend; these services stand in for one by
//! sleeping a configured latency before answering. They hold no session
//! state themselves — callers feed the results into the stores.
//!
//! # Services
//!
//! - `auth` - Mocked credential checking and registration
//! - `membership` - Mocked premium subscription payment

pub mod auth;
pub mod membership;
