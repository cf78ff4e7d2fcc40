//! In-memory snapshot backend.

use std::cell::RefCell;
use std::rc::Rc;

use crate::item::LineItem;

use super::SnapshotStore;

/// Snapshot store backed by process memory.
///
/// Clones share the same backing storage, like two handles to the same
/// browser `localStorage`: build a second cart from a clone of the store
/// and it restores what the first cart saved. Used as the test double and
/// as the degraded session-only mode when no durable path is configured.
///
/// Single-threaded by design (`Rc<RefCell<..>>`), matching the cart's
/// one-session execution model.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Vec<LineItem>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the currently persisted snapshot, for inspection.
    #[must_use]
    pub fn persisted(&self) -> Vec<LineItem> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Vec<LineItem> {
        self.slot.borrow().clone()
    }

    fn save(&self, items: &[LineItem]) {
        *self.slot.borrow_mut() = items.to_vec();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use paper_lantern_core::{CurrencyCode, Price, ProductId, Quantity};

    use crate::item::Product;

    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let product = Product {
            id: ProductId::new(1),
            name: "Lantern".to_owned(),
            price: Price::from_cents(900, CurrencyCode::USD),
            image: "/images/lantern.jpg".to_owned(),
        };
        let line = LineItem::new(&product, Quantity::ONE);

        let store = MemoryStore::new();
        store.clone().save(std::slice::from_ref(&line));

        assert_eq!(store.load(), vec![line]);
    }
}
