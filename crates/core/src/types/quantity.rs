//! Line-item quantity type.
//!
//! A cart line always holds at least one unit. `Quantity` makes that
//! invariant unrepresentable rather than checked at every call site: it
//! wraps a `NonZeroU32`, so a zero quantity cannot be constructed and a
//! persisted snapshot containing one fails to deserialize.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The value was zero.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A positive unit count for a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// One unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a `Quantity` from a raw count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if `count` is zero.
    pub fn new(count: u32) -> Result<Self, QuantityError> {
        NonZeroU32::new(count).map(Self).ok_or(QuantityError::Zero)
    }

    /// The raw unit count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }

    /// This quantity plus `other`, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }

    /// This quantity plus one, saturating at `u32::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// This quantity minus one, or `None` when already at the floor of 1.
    ///
    /// The caller decides what the floor means; the cart treats it as
    /// "leave the line alone" rather than removing it.
    #[must_use]
    pub fn decrement(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Quantity::new(0), Err(QuantityError::Zero));
        assert_eq!(Quantity::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_increment() {
        let quantity = Quantity::new(2).unwrap();
        assert_eq!(quantity.increment().get(), 3);
    }

    #[test]
    fn test_increment_saturates() {
        let quantity = Quantity::new(u32::MAX).unwrap();
        assert_eq!(quantity.increment().get(), u32::MAX);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let quantity = Quantity::new(2).unwrap();
        assert_eq!(quantity.decrement(), Some(Quantity::ONE));
        assert_eq!(Quantity::ONE.decrement(), None);
    }

    #[test]
    fn test_saturating_add() {
        let a = Quantity::new(1).unwrap();
        let b = Quantity::new(3).unwrap();
        assert_eq!(a.saturating_add(b).get(), 4);
    }

    #[test]
    fn test_serde_rejects_zero() {
        let parsed: Result<Quantity, _> = serde_json::from_str("0");
        assert!(parsed.is_err());

        let parsed: Quantity = serde_json::from_str("4").unwrap();
        assert_eq!(parsed.get(), 4);
    }
}
