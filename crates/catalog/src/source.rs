//! Product source abstraction.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

/// Why a product source could not deliver the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("product source unreachable: {0}")]
    Transport(String),

    #[error("product source returned status {0}")]
    Status(u16),

    #[error("failed to read product source: {0}")]
    Io(String),

    #[error("failed to decode products: {0}")]
    Decode(String),
}

/// Supplies the full product list, once per session.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError>;
}

#[async_trait]
impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        (**self).fetch_all().await
    }
}
