use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId};

/// Catalog product as delivered by the product source.
///
/// Products are read-only for the whole session: they are fetched once at
/// startup and never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub main_category: String,
    pub actual_price: Price,
    /// Discounted price; `null` or missing means the product is not on sale.
    #[serde(default)]
    pub discount_price: Option<Price>,
    /// Average rating on a 0–5 scale.
    pub rating: f64,
}

/// Price pair shown on a product card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayPrice {
    /// Effective price (what the customer pays).
    pub current: Price,
    /// Original price, struck through, when a discount applies.
    pub struck_through: Option<Price>,
}

impl Product {
    /// Discount price if present, else actual price.
    pub fn effective_price(&self) -> Price {
        self.discount_price.unwrap_or(self.actual_price)
    }

    pub fn has_discount(&self) -> bool {
        self.discount_price.is_some()
    }

    pub fn display_price(&self) -> DisplayPrice {
        DisplayPrice {
            current: self.effective_price(),
            struck_through: self.discount_price.map(|_| self.actual_price),
        }
    }
}
