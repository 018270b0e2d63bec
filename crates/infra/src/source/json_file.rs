use std::path::{Path, PathBuf};

use async_trait::async_trait;

use shopfront_catalog::{Product, ProductSource, SourceError};

/// Reads the catalog from a JSON file holding an array of products.
#[derive(Debug, Clone)]
pub struct JsonFileProductSource {
    path: PathBuf,
}

impl JsonFileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductSource for JsonFileProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;

        let products: Vec<Product> = serde_json::from_slice(&bytes)
            .map_err(|e| SourceError::Decode(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(path = %self.path.display(), count = products.len(), "read product file");
        Ok(products)
    }
}
