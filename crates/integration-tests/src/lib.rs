//! Integration tests for Paper Lantern.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paper-lantern-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full mutation sequences over an in-memory cart
//! - `persistence` - Snapshot round-trips across simulated restarts
//! - `checkout_flow` - Session plus checkout end to end
//!
//! This crate exports shared fixtures only.

#![cfg_attr(not(test), forbid(unsafe_code))]

use paper_lantern_cart::Product;
use paper_lantern_core::{CurrencyCode, Price, ProductId};

/// Build a catalog product fixture priced in cents.
#[must_use]
pub fn product(id: i32, name: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        image: format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-")),
    }
}
