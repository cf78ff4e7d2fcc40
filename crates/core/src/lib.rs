//! Paper Lantern Core - Shared types library.
//!
//! This crate provides common types used across all Paper Lantern components:
//! - `cart` - The cart engine and its persistence/catalog collaborators
//! - `cli` - Command-line driver for browsing the catalog and managing a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, quantities, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
