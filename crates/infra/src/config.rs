//! Configuration loading and representation.
//!
//! Everything comes from environment variables with development defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SHOPFRONT_PRODUCTS` | `products.json` | JSON file path, or `http(s)://` API base URL |
//! | `SHOPFRONT_CART_PATH` | `cart.json` | file backing the cart |
//! | `SHOPFRONT_PAGE_SIZE` | `12` | products revealed per "load more" |
//! | `SHOPFRONT_CURRENCY` | `₽` | symbol appended to price labels |

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use shopfront_catalog::{CatalogSettings, ProductSource};

use crate::cart_store::JsonFileCartStore;
use crate::source::JsonFileProductSource;

pub const PRODUCTS_VAR: &str = "SHOPFRONT_PRODUCTS";
pub const CART_PATH_VAR: &str = "SHOPFRONT_CART_PATH";
pub const PAGE_SIZE_VAR: &str = "SHOPFRONT_PAGE_SIZE";
pub const CURRENCY_VAR: &str = "SHOPFRONT_CURRENCY";

/// Where the catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLocation {
    File(PathBuf),
    Http(String),
}

impl ProductLocation {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ProductLocation::Http(raw.to_string())
        } else {
            ProductLocation::File(PathBuf::from(raw))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopfrontConfig {
    pub products: ProductLocation,
    pub cart_path: PathBuf,
    pub settings: CatalogSettings,
}

impl Default for ShopfrontConfig {
    fn default() -> Self {
        Self {
            products: ProductLocation::File(PathBuf::from("products.json")),
            cart_path: PathBuf::from("cart.json"),
            settings: CatalogSettings::default(),
        }
    }
}

impl ShopfrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; invalid values are logged and
    /// replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PRODUCTS_VAR).filter(|v| !v.trim().is_empty()) {
            config.products = ProductLocation::parse(&raw);
        }

        if let Some(raw) = lookup(CART_PATH_VAR).filter(|v| !v.trim().is_empty()) {
            config.cart_path = PathBuf::from(raw.trim());
        }

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            match raw.trim().parse::<NonZeroUsize>() {
                Ok(size) => config.settings.page_size = size,
                Err(err) => tracing::warn!(
                    value = %raw,
                    %err,
                    default = config.settings.page_size.get(),
                    "invalid {PAGE_SIZE_VAR}; using default"
                ),
            }
        }

        if let Some(raw) = lookup(CURRENCY_VAR) {
            config.settings.currency_symbol = raw.trim().to_string();
        }

        config
    }

    pub fn cart_store(&self) -> JsonFileCartStore {
        JsonFileCartStore::new(&self.cart_path)
    }

    pub fn product_source(&self) -> Arc<dyn ProductSource> {
        match &self.products {
            ProductLocation::File(path) => Arc::new(JsonFileProductSource::new(path)),
            ProductLocation::Http(base_url) => {
                #[cfg(feature = "http")]
                {
                    Arc::new(crate::source::HttpProductSource::new(base_url.clone()))
                }
                #[cfg(not(feature = "http"))]
                {
                    tracing::warn!(
                        %base_url,
                        "{PRODUCTS_VAR} is a URL but the http feature is not enabled; catalog will be empty"
                    );
                    Arc::new(crate::source::InMemoryProductSource::default())
                }
            }
        }
    }
}
