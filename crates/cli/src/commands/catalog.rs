//! Browse the product catalog.

#![allow(clippy::print_stdout)] // terminal output is this command's job

use paper_lantern_cart::{Catalog, JsonCatalog};

use crate::config::CliConfig;

/// List the available products, optionally in randomized order.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be opened.
pub fn list(config: &CliConfig, shuffle: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = JsonCatalog::open(&config.catalog_path)?;

    let products = if shuffle {
        catalog.shuffled()
    } else {
        catalog.products().to_vec()
    };

    for product in &products {
        println!(
            "{:>4}  {:<32} {:>10}",
            product.id.as_i32(),
            product.name,
            product.price.to_string()
        );
    }
    println!("{} products", products.len());

    Ok(())
}
