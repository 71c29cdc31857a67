//! ShopEase storefront library.
//!
//! This crate provides the storefront state layer as a library: stores that
//! own shopper state (catalog, cart, wishlist, membership, session, theme)
//! and pure functions that derive views from it. Presentation code sits on
//! top of this crate and is not part of it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod membership;
pub mod observe;
pub mod pricing;
pub mod recently_viewed;
pub mod services;
pub mod state;
pub mod storage;
pub mod theme;
pub mod wishlist;
