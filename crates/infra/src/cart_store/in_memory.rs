use std::sync::RwLock;

use shopfront_catalog::{CartStore, CartStoreError};
use shopfront_core::ProductId;

/// In-memory cart storage for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    inner: RwLock<Vec<ProductId>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for InMemoryCartStore {
    fn read(&self) -> Result<Vec<ProductId>, CartStoreError> {
        let items = self
            .inner
            .read()
            .map_err(|_| CartStoreError::Unavailable("cart lock poisoned".to_string()))?;
        Ok(items.clone())
    }

    fn write(&self, items: &[ProductId]) -> Result<(), CartStoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| CartStoreError::Unavailable("cart lock poisoned".to_string()))?;
        *guard = items.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::add_to_cart;

    #[test]
    fn starts_empty_and_overwrites() {
        let store = InMemoryCartStore::new();
        assert!(store.read().unwrap().is_empty());

        add_to_cart(&store, ProductId::new(7)).unwrap();
        add_to_cart(&store, ProductId::new(7)).unwrap();
        assert_eq!(store.read().unwrap(), vec![ProductId::new(7), ProductId::new(7)]);

        store.write(&[ProductId::new(1)]).unwrap();
        assert_eq!(store.read().unwrap(), vec![ProductId::new(1)]);
    }
}
