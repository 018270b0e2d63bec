//! View data handed to the rendering surface.

use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId};

use crate::product::{DisplayPrice, Product};

const MAX_STARS: usize = 5;

/// Everything a product card shows, already derived from the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub rating: f64,
    /// Five glyphs: filled stars for the rounded rating, hollow for the rest.
    pub stars: String,
    pub current_price: String,
    pub old_price: Option<String>,
}

impl ProductCard {
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        let DisplayPrice {
            current,
            struck_through,
        } = product.display_price();

        Self {
            id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            rating: product.rating,
            stars: star_bar(product.rating),
            current_price: price_label(current, currency_symbol),
            old_price: struck_through.map(|p| price_label(p, currency_symbol)),
        }
    }
}

/// `★★★★☆` style rating bar; ratings outside 0–5 are clamped.
pub fn star_bar(rating: f64) -> String {
    let filled = if rating.is_finite() {
        rating.clamp(0.0, MAX_STARS as f64).round() as usize
    } else {
        0
    };
    let mut bar = "★".repeat(filled);
    bar.push_str(&"☆".repeat(MAX_STARS - filled));
    bar
}

pub fn price_label(price: Price, currency_symbol: &str) -> String {
    if currency_symbol.is_empty() {
        price.to_string()
    } else {
        format!("{price} {currency_symbol}")
    }
}

/// Cart-count indicator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartBadge {
    pub count: usize,
}

impl core::fmt::Display for CartBadge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.count > 0 {
            write!(f, "Cart ({})", self.count)
        } else {
            f.write_str("Cart")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Transient message for the user; how long it stays visible is up to the
/// rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}
