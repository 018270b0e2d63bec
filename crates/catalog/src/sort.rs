//! Catalog ordering.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::convert::Infallible;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Sort order selected by the user.
///
/// Parsing is total: any value other than the known names maps to
/// [`SortMode::Unordered`], which keeps the input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    #[default]
    PriceAscending,
    PriceDescending,
    RatingDescending,
    Unordered,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceAscending => "price_ascending",
            SortMode::PriceDescending => "price_descending",
            SortMode::RatingDescending => "rating_descending",
            SortMode::Unordered => "unordered",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortMode::PriceAscending => a.effective_price().cmp(&b.effective_price()),
            SortMode::PriceDescending => b.effective_price().cmp(&a.effective_price()),
            // -0.0 and 0.0 are the same rating and must keep input order.
            SortMode::RatingDescending => (b.rating + 0.0).total_cmp(&(a.rating + 0.0)),
            SortMode::Unordered => Ordering::Equal,
        }
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short names are the values of the storefront's sort selector.
        Ok(match s.trim() {
            "price_ascending" | "price_asc" => SortMode::PriceAscending,
            "price_descending" | "price_desc" => SortMode::PriceDescending,
            "rating_descending" | "rating" => SortMode::RatingDescending,
            other => {
                tracing::debug!(mode = other, "unrecognized sort mode; keeping input order");
                SortMode::Unordered
            }
        })
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<SortMode> for String {
    fn from(value: SortMode) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for SortMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return a sorted copy of `products`; the input is left untouched.
///
/// `slice::sort_by` is stable, so products with equal keys keep their relative
/// input order.
pub fn apply_sort<P>(products: &[P], mode: SortMode) -> Vec<P>
where
    P: Borrow<Product> + Clone,
{
    let mut sorted = products.to_vec();
    if mode != SortMode::Unordered {
        sorted.sort_by(|a, b| mode.compare(a.borrow(), b.borrow()));
    }
    sorted
}
