//! Category facet derivation.

use std::collections::HashSet;

use crate::product::Product;

/// Distinct `main_category` labels across `products`, in first-seen order.
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.main_category.as_str()))
        .map(|p| p.main_category.clone())
        .collect()
}
