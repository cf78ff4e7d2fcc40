//! Place an order from the current cart.

#![allow(clippy::print_stdout)] // terminal output is this command's job

use paper_lantern_cart::{CartStore, CheckoutForm, JsonFileStore, checkout};

use crate::config::CliConfig;

/// Validate the buyer details, place the order, and print the summary.
///
/// # Errors
///
/// Returns an error when the cart is empty or a form field is blank.
pub fn place(config: &CliConfig, form: &CheckoutForm) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = CartStore::restore(JsonFileStore::new(config.snapshot_path()));
    let summary = checkout::place_order(&mut cart, form)?;

    println!("Order {} placed.", summary.order_id);
    for line in &summary.lines {
        println!(
            "  {:>3} x {:<32} {:>10}",
            line.quantity.get(),
            line.name,
            line.line_total().to_string()
        );
    }
    println!("Charged: {}", summary.total);

    Ok(())
}
