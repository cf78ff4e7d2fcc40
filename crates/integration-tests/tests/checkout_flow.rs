//! Session plus checkout end to end.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use paper_lantern_cart::{
    CheckoutError, CheckoutForm, CurrentUser, MemoryStore, Session, checkout,
};
use paper_lantern_core::{Email, UserId};
use paper_lantern_integration_tests::product;

fn form() -> CheckoutForm {
    CheckoutForm {
        name: "Ada Shopper".to_owned(),
        address: "1 Lantern Lane".to_owned(),
        card_number: "4242424242424242".to_owned(),
        expiry_date: "12/27".to_owned(),
        cvv: "123".to_owned(),
    }
}

#[test]
fn test_guest_fills_cart_signs_in_and_checks_out() {
    let store = MemoryStore::new();
    let mut session = Session::begin(store.clone());

    session
        .cart_mut()
        .add_item(&product(1, "Rice Paper Table Lamp", 2450), 2)
        .unwrap();
    session
        .cart_mut()
        .add_item(&product(4, "Beeswax Pillar Candle", 925), 1)
        .unwrap();

    session.sign_in(CurrentUser {
        id: UserId::new(7),
        email: Email::parse("ada@example.com").unwrap(),
    });

    let summary = checkout::place_order(session.cart_mut(), &form()).unwrap();

    // 2 x 24.50 + 1 x 9.25 = 58.25
    assert_eq!(summary.total.amount, Decimal::new(5825, 2));
    assert_eq!(summary.lines.len(), 2);

    // The cart and its snapshot are emptied by the order.
    assert!(session.cart().is_empty());
    assert!(store.persisted().is_empty());
}

#[test]
fn test_incomplete_form_leaves_cart_intact() {
    let mut session = Session::begin(MemoryStore::new());
    session
        .cart_mut()
        .add_item(&product(1, "Rice Paper Table Lamp", 2450), 1)
        .unwrap();

    let incomplete = CheckoutForm {
        cvv: String::new(),
        ..form()
    };

    let result = checkout::place_order(session.cart_mut(), &incomplete);
    assert!(matches!(result, Err(CheckoutError::MissingField("cvv"))));
    assert_eq!(session.cart().len(), 1);
}

#[test]
fn test_checkout_requires_items() {
    let mut session = Session::begin(MemoryStore::new());
    let result = checkout::place_order(session.cart_mut(), &form());
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));
}
