//! ShopEase Core - Shared types library.
//!
//! This crate provides common types used across all ShopEase components:
//! - `storefront` - State and derived-view layer for the shop
//! - `cli` - Command-line demo and maintenance tools
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, products,
//!   and the theme preference

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
