//! Show and mutate the persisted cart.
//!
//! Each command restores the cart from the snapshot under the configured
//! data directory, applies one mutation, and lets write-through persistence
//! save the result before the process exits.

#![allow(clippy::print_stdout)] // terminal output is this command's job

use paper_lantern_cart::{Catalog, CartStore, JsonCatalog, JsonFileStore};
use paper_lantern_core::ProductId;

use crate::config::CliConfig;

fn open_cart(config: &CliConfig) -> CartStore<JsonFileStore> {
    CartStore::restore(JsonFileStore::new(config.snapshot_path()))
}

/// Print the cart contents, line totals, and the subtotal.
pub fn show(config: &CliConfig) {
    let cart = open_cart(config);

    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in cart.items() {
        println!(
            "{:>3} x {:<32} {:>10} each {:>10}",
            item.quantity.get(),
            item.name,
            item.price.to_string(),
            item.line_total().to_string()
        );
    }
    println!(
        "{} lines, {} units. Total: {}",
        cart.len(),
        cart.total_quantity(),
        cart.subtotal()
    );
}

/// Add `quantity` units of the given catalog product.
///
/// # Errors
///
/// Returns an error if the catalog cannot be opened, the product id is
/// unknown, or the operands are rejected by the cart.
pub fn add(
    config: &CliConfig,
    product_id: i32,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = JsonCatalog::open(&config.catalog_path)?;
    let id = ProductId::new(product_id);
    let product = catalog
        .find(id)
        .ok_or_else(|| format!("unknown product id: {product_id}"))?;

    let mut cart = open_cart(config);
    cart.add_item(product, quantity)?;

    println!("Added {} x {}.", quantity, product.name);
    Ok(())
}

/// Remove a line from the cart. Unknown ids are a no-op.
pub fn remove(config: &CliConfig, product_id: i32) {
    let mut cart = open_cart(config);
    cart.remove_item(ProductId::new(product_id));
    println!("Removed product {product_id}.");
}

/// Increase a line's quantity by one. Unknown ids are a no-op.
pub fn increase(config: &CliConfig, product_id: i32) {
    let mut cart = open_cart(config);
    cart.increase_quantity(ProductId::new(product_id));
    println!("Increased product {product_id}.");
}

/// Decrease a line's quantity by one, never below 1. Unknown ids are a no-op.
pub fn decrease(config: &CliConfig, product_id: i32) {
    let mut cart = open_cart(config);
    cart.decrease_quantity(ProductId::new(product_id));
    println!("Decreased product {product_id}.");
}

/// Empty the cart.
pub fn clear(config: &CliConfig) {
    let mut cart = open_cart(config);
    cart.clear();
    println!("Cart cleared.");
}
