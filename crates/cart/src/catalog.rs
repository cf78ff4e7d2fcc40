//! Product catalog collaborator.
//!
//! Supplies the available products as read-only reference data. Unlike the
//! cart snapshot, a broken catalog is a real error: the storefront cannot
//! invent its product list, so open failures propagate instead of being
//! recovered as empty.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;

use paper_lantern_core::ProductId;

use crate::item::Product;

/// Errors that can occur when opening a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog {path}: {source}")]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog file is not a valid JSON product list.
    #[error("catalog {path} is malformed: {source}")]
    Malformed {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A catalog entry fails validation.
    #[error("catalog product {id} is invalid: {reason}")]
    InvalidProduct {
        /// Id of the offending product.
        id: ProductId,
        /// Human-readable reason.
        reason: String,
    },
}

/// Catalog collaborator contract consumed by the storefront.
pub trait Catalog {
    /// All available products, in catalog order.
    fn products(&self) -> &[Product];

    /// Look up a product by id.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }

    /// A randomized copy of the product list, for storefront display.
    fn shuffled(&self) -> Vec<Product> {
        let mut products = self.products().to_vec();
        products.shuffle(&mut rand::rng());
        products
    }
}

/// Catalog loaded from a JSON file (an array of products).
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    products: Vec<Product>,
}

impl JsonCatalog {
    /// Load and validate a catalog from the given path.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, is not valid
    /// JSON, or contains a product with a negative price or empty name.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_products(products)
    }

    /// Build a catalog from an already-loaded product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidProduct`] for entries with a negative
    /// price or empty name.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        for product in &products {
            if product.price.is_negative() {
                return Err(CatalogError::InvalidProduct {
                    id: product.id,
                    reason: "negative price".to_owned(),
                });
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::InvalidProduct {
                    id: product.id,
                    reason: "empty name".to_owned(),
                });
            }
        }

        Ok(Self { products })
    }
}

impl Catalog for JsonCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use paper_lantern_core::{CurrencyCode, Price};

    use super::*;

    fn product(id: i32, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            image: format!("/images/{id}.jpg"),
        }
    }

    #[test]
    fn test_find() {
        let catalog = JsonCatalog::from_products(vec![
            product(1, "Lantern", 900),
            product(2, "Candle", 300),
        ])
        .unwrap();

        assert_eq!(catalog.find(ProductId::new(2)).unwrap().name, "Candle");
        assert!(catalog.find(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = JsonCatalog::from_products(vec![product(1, "Lantern", -900)]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = JsonCatalog::from_products(vec![product(1, "", 900)]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_shuffled_preserves_contents() {
        let products: Vec<Product> = (1..=10)
            .map(|id| product(id, &format!("Product {id}"), 100 * i64::from(id)))
            .collect();
        let catalog = JsonCatalog::from_products(products.clone()).unwrap();

        let mut shuffled = catalog.shuffled();
        shuffled.sort_by_key(|p| p.id.as_i32());
        assert_eq!(shuffled, products);
    }

    #[test]
    fn test_open_missing_file() {
        let result = JsonCatalog::open("/definitely/not/here/products.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_open_parses_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Lantern","price":{"amount":"9.00","currency_code":"USD"},"image":"/images/1.jpg"}]"#,
        )
        .unwrap();

        let catalog = JsonCatalog::open(&path).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].name, "Lantern");
    }
}
