//! The cart store: mutation commands, derived totals, write-through persistence.
//!
//! One `CartStore` per browsing session, constructed by restoring the last
//! persisted snapshot. All mutating operations run to completion and write
//! the full state through to the [`SnapshotStore`] before returning, so a
//! crash immediately after a successful call loses at most that one
//! in-flight call. Persistence failures never roll back the in-memory
//! mutation; the running session is the source of truth.

use rust_decimal::Decimal;
use thiserror::Error;

use paper_lantern_core::{CurrencyCode, Price, ProductId, Quantity, QuantityError};

use crate::item::{LineItem, Product};
use crate::persist::SnapshotStore;

/// Rejected operands to cart mutations.
///
/// The cart fails fast on malformed input instead of silently storing a
/// line it could never render or price.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity was zero. Zero-quantity lines are rejected
    /// outright; adding nothing is a caller bug, not a no-op.
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    /// The product carries a negative price.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),

    /// The product has no display name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// An ordered collection of line items with an attached snapshot store.
///
/// Keyed by product id: at most one line per product, merged on add.
/// Construct one per session with [`CartStore::restore`] and pass it by
/// reference to consumers; there is no process-wide singleton.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    persistence: S,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Build a cart from the last persisted snapshot.
    ///
    /// An absent or unreadable snapshot restores as an empty cart; the
    /// store's `load` contract guarantees this never fails.
    pub fn restore(persistence: S) -> Self {
        let items = persistence.load();
        Self { items, persistence }
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line for the same product id exists, its quantity is
    /// incremented; otherwise a new line is appended, preserving insertion
    /// order. Persists on success.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when `quantity` is zero or the product is
    /// malformed (negative price, empty name). State is untouched on error.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        let quantity = Quantity::new(quantity)?;

        if product.price.is_negative() {
            return Err(CartError::NegativePrice(product.id));
        }
        if product.name.trim().is_empty() {
            return Err(CartError::EmptyName(product.id));
        }

        match self.items.iter_mut().find(|item| item.product_id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(LineItem::new(product, quantity)),
        }

        self.persistence.save(&self.items);
        Ok(())
    }

    /// Delete the line with the given product id.
    ///
    /// An absent id is a silent no-op; calling this twice in a row has the
    /// same effect as calling it once. The snapshot is rewritten either way.
    pub fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|item| item.product_id != id);
        self.persistence.save(&self.items);
    }

    /// Increase the quantity of the line with the given id by one.
    ///
    /// An absent id is a no-op and does not touch the snapshot.
    pub fn increase_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == id) {
            item.quantity = item.quantity.increment();
            self.persistence.save(&self.items);
        }
    }

    /// Decrease the quantity of the line with the given id by one.
    ///
    /// A line at quantity 1 is left alone: the floor is 1, and removal is
    /// a distinct explicit command ([`CartStore::remove_item`]). Absent ids
    /// and floored lines are no-ops and do not touch the snapshot.
    pub fn decrease_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == id)
            && let Some(decremented) = item.quantity.decrement()
        {
            item.quantity = decremented;
            self.persistence.save(&self.items);
        }
    }

    /// Empty the cart unconditionally and persist the empty snapshot.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persistence.save(&self.items);
    }

    /// Sum of price times quantity over all lines. Exactly zero for an
    /// empty cart. Pure; does not touch persistence.
    ///
    /// Lines are assumed to share one currency (the catalog is single-
    /// currency); the sum is reported in the first line's currency.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.price.currency_code);
        let amount: Decimal = self
            .items
            .iter()
            .map(|item| item.line_total().amount)
            .sum();
        Price::new(amount, currency)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Number of distinct lines. This is what the storefront badge shows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a line for the given product id exists.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.product_id == id)
    }

    /// Read-only view of the current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}
