//! Append-only cart persisted through a [`CartStore`].

use std::sync::Arc;

use thiserror::Error;

use shopfront_core::ProductId;

use crate::card::CartBadge;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartStoreError {
    #[error("cart storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored cart is corrupt: {0}")]
    Corrupt(String),
}

/// Persistent storage for the cart contents.
///
/// A missing cart reads as empty. Implementations overwrite the whole sequence
/// on `write`.
pub trait CartStore: Send + Sync {
    fn read(&self) -> Result<Vec<ProductId>, CartStoreError>;
    fn write(&self, items: &[ProductId]) -> Result<(), CartStoreError>;
}

impl<S> CartStore for Arc<S>
where
    S: CartStore + ?Sized,
{
    fn read(&self) -> Result<Vec<ProductId>, CartStoreError> {
        (**self).read()
    }

    fn write(&self, items: &[ProductId]) -> Result<(), CartStoreError> {
        (**self).write(items)
    }
}

/// Ordered product identifiers; repetition encodes quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<ProductId>,
}

impl Cart {
    pub fn from_items(items: Vec<ProductId>) -> Self {
        Self { items }
    }

    /// Read the cart, starting over from empty when the stored value is corrupt.
    pub fn load<S: CartStore + ?Sized>(store: &S) -> Result<Self, CartStoreError> {
        match store.read() {
            Ok(items) => Ok(Self { items }),
            Err(CartStoreError::Corrupt(reason)) => {
                tracing::warn!(%reason, "discarding corrupt cart");
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn push(&mut self, product_id: ProductId) {
        self.items.push(product_id);
    }

    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn badge(&self) -> CartBadge {
        CartBadge { count: self.count() }
    }
}

/// Append `product_id` to the stored cart and return the updated badge.
///
/// The identifier is not checked against the catalog.
pub fn add_to_cart<S: CartStore + ?Sized>(
    store: &S,
    product_id: ProductId,
) -> Result<CartBadge, CartStoreError> {
    let mut cart = Cart::load(store)?;
    cart.push(product_id);
    store.write(cart.items())?;

    tracing::debug!(%product_id, count = cart.count(), "added to cart");
    Ok(cart.badge())
}

/// Current badge; unreadable storage shows as an empty cart.
pub fn read_cart_badge<S: CartStore + ?Sized>(store: &S) -> CartBadge {
    match Cart::load(store) {
        Ok(cart) => cart.badge(),
        Err(err) => {
            tracing::warn!(%err, "cart unreadable; showing empty badge");
            CartBadge { count: 0 }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_store {
    use std::sync::Mutex;

    use super::*;

    /// Minimal store for domain tests.
    #[derive(Debug, Default)]
    pub struct VecCartStore {
        pub items: Mutex<Option<Vec<ProductId>>>,
        pub corrupt: bool,
        pub fail_writes: bool,
    }

    impl CartStore for VecCartStore {
        fn read(&self) -> Result<Vec<ProductId>, CartStoreError> {
            if self.corrupt {
                return Err(CartStoreError::Corrupt("not a JSON array".to_string()));
            }
            Ok(self.items.lock().unwrap().clone().unwrap_or_default())
        }

        fn write(&self, items: &[ProductId]) -> Result<(), CartStoreError> {
            if self.fail_writes {
                return Err(CartStoreError::Unavailable("quota exceeded".to_string()));
            }
            *self.items.lock().unwrap() = Some(items.to_vec());
            Ok(())
        }
    }
}
