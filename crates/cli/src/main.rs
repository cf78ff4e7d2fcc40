//! Paper Lantern CLI - Terminal storefront driver.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! pl-cli catalog list
//! pl-cli catalog list --shuffle
//!
//! # Manage the cart (persisted under LANTERN_DATA_DIR)
//! pl-cli cart add 3 --quantity 2
//! pl-cli cart show
//! pl-cli cart decrease 3
//! pl-cli cart clear
//!
//! # Place an order
//! pl-cli checkout --name "Ada Shopper" --address "1 Lantern Lane" \
//!     --card-number 4242424242424242 --expiry-date 12/27 --cvv 123
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Show available products
//! - `cart` - Show and mutate the persisted cart
//! - `checkout` - Validate buyer details and place an order

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "pl-cli")]
#[command(author, version, about = "Paper Lantern CLI storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Show and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Validate buyer details and place an order
    Checkout {
        /// Buyer's full name
        #[arg(long)]
        name: String,

        /// Shipping address
        #[arg(long)]
        address: String,

        /// Card number
        #[arg(long)]
        card_number: String,

        /// Card expiry date (MM/YY)
        #[arg(long)]
        expiry_date: String,

        /// Card verification value
        #[arg(long)]
        cvv: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List available products
    List {
        /// Randomize the listing order
        #[arg(long)]
        shuffle: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id from the catalog
        product_id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id of the line to remove
        product_id: i32,
    },
    /// Increase a line's quantity by one
    Increase {
        /// Product id of the line
        product_id: i32,
    },
    /// Decrease a line's quantity by one (floor of 1)
    Decrease {
        /// Product id of the line
        product_id: i32,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { shuffle } => commands::catalog::list(&config, shuffle)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config),
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&config, product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&config, product_id),
            CartAction::Increase { product_id } => commands::cart::increase(&config, product_id),
            CartAction::Decrease { product_id } => commands::cart::decrease(&config, product_id),
            CartAction::Clear => commands::cart::clear(&config),
        },
        Commands::Checkout {
            name,
            address,
            card_number,
            expiry_date,
            cvv,
        } => {
            let form = paper_lantern_cart::CheckoutForm {
                name,
                address,
                card_number,
                expiry_date,
                cvv,
            };
            commands::checkout::place(&config, &form)?;
        }
    }
    Ok(())
}
