//! Checkout: form validation and order placement.
//!
//! No payment gateway is contacted. The checkout validates the buyer's
//! details, snapshots the cart into an order summary, and clears the cart.
//! Card fields are held only for validation and are never logged.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use paper_lantern_core::Price;

use crate::item::LineItem;
use crate::persist::SnapshotStore;
use crate::store::CartStore;

/// Errors that can occur while placing an order.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// There is nothing to check out.
    #[error("your cart is empty")]
    EmptyCart,

    /// A required form field was left blank.
    #[error("please fill in all fields: {0} is required")]
    MissingField(&'static str),
}

/// Buyer details collected by the checkout form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    /// Buyer's full name.
    pub name: String,
    /// Shipping address.
    pub address: String,
    /// Card number. Never logged.
    pub card_number: String,
    /// Card expiry date. Never logged.
    pub expiry_date: String,
    /// Card verification value. Never logged.
    pub cvv: String,
}

impl CheckoutForm {
    /// Check that every field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields = [
            ("name", &self.name),
            ("address", &self.address),
            ("card number", &self.card_number),
            ("expiry date", &self.expiry_date),
            ("cvv", &self.cvv),
        ];

        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(label));
            }
        }
        Ok(())
    }
}

/// The result of a successfully placed order.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Identifier assigned to the order.
    pub order_id: Uuid,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// The lines that were checked out, in cart order.
    pub lines: Vec<LineItem>,
    /// Total charged (sum of line totals).
    pub total: Price,
}

/// Validate the form, snapshot the cart into an order, and clear the cart.
///
/// The cart is cleared (and its empty snapshot persisted) only after
/// validation succeeds; on error the cart is untouched.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart and
/// [`CheckoutError::MissingField`] for incomplete buyer details.
pub fn place_order<S: SnapshotStore>(
    cart: &mut CartStore<S>,
    form: &CheckoutForm,
) -> Result<OrderSummary, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    form.validate()?;

    let summary = OrderSummary {
        order_id: Uuid::new_v4(),
        placed_at: Utc::now(),
        lines: cart.items().to_vec(),
        total: cart.subtotal(),
    };

    info!(
        order_id = %summary.order_id,
        lines = summary.lines.len(),
        total = %summary.total,
        "processing checkout"
    );

    cart.clear();
    Ok(summary)
}
