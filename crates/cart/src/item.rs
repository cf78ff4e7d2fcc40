//! Cart line items and the catalog entries they are created from.

use serde::{Deserialize, Serialize};

use paper_lantern_core::{Price, ProductId, Quantity};

/// A product as supplied by the catalog collaborator.
///
/// Read-only reference data; the cart never mutates the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (URI).
    pub image: String,
}

/// One product entry in the cart with an associated quantity.
///
/// Carries a copy of the product's display fields so the cart renders
/// without consulting the catalog. The quantity invariant (at least 1)
/// is enforced by the [`Quantity`] type itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier of the product this line holds.
    pub product_id: ProductId,
    /// Display name, copied from the product at add time.
    pub name: String,
    /// Unit price, copied from the product at add time.
    pub price: Price,
    /// Image reference, copied from the product at add time.
    pub image: String,
    /// Units of the product in the cart.
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a line from a catalog product and a unit count.
    #[must_use]
    pub fn new(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// The extended price for this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.extend(self.quantity)
    }
}
