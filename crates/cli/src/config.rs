//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LANTERN_DATA_DIR` - Directory holding the cart snapshot (default: `.paper-lantern`)
//! - `LANTERN_CATALOG` - Path to the product catalog JSON file (default: `products.json`)

use std::path::PathBuf;

/// CLI application configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding per-client state (the cart snapshot).
    pub data_dir: PathBuf,
    /// Path to the product catalog file.
    pub catalog_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Every variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default("LANTERN_DATA_DIR", ".paper-lantern")),
            catalog_path: PathBuf::from(get_env_or_default("LANTERN_CATALOG", "products.json")),
        }
    }

    /// Path of the cart snapshot file inside the data directory.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("cart.json")
    }

}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path_under_data_dir() {
        let config = CliConfig {
            data_dir: PathBuf::from("/tmp/lantern"),
            catalog_path: PathBuf::from("products.json"),
        };
        assert_eq!(
            config.snapshot_path(),
            PathBuf::from("/tmp/lantern/cart.json")
        );
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("LANTERN_DEFINITELY_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
