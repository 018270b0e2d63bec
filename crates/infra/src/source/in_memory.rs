use async_trait::async_trait;

use shopfront_catalog::{Product, ProductSource, SourceError};

/// Fixed product list.
///
/// Intended for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductSource {
    products: Vec<Product>,
}

impl InMemoryProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}
