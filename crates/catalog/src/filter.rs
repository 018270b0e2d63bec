//! Catalog filters: category set, price range and discount flag.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::Product;

/// Active filter criteria.
///
/// The default state restricts nothing. When both bounds are set, `price_from`
/// is expected to be ≤ `price_to`; an inverted range is not rejected and simply
/// matches no product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Empty set means "any category".
    pub categories: HashSet<String>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
    pub discount_only: bool,
}

/// Filter form as submitted by the user, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterForm {
    pub categories: Vec<String>,
    pub price_from: String,
    pub price_to: String,
    pub discount: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterInputError {
    #[error("malformed {field} bound: {value:?} is not a number")]
    MalformedPriceBound { field: &'static str, value: String },
}

/// Parse a price bound text field.
///
/// Blank input means "no bound". Anything that is not a finite number is a
/// [`FilterInputError::MalformedPriceBound`].
pub fn parse_price_bound(field: &'static str, raw: &str) -> Result<Option<f64>, FilterInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(FilterInputError::MalformedPriceBound {
            field,
            value: raw.to_string(),
        }),
    }
}

impl FilterState {
    /// Build filter criteria from a submitted form.
    ///
    /// Malformed price bounds are logged and treated as absent.
    pub fn from_form(form: &FilterForm) -> Self {
        let bound = |field: &'static str, raw: &str| match parse_price_bound(field, raw) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(%err, "ignoring price bound");
                None
            }
        };

        Self {
            categories: form.categories.iter().cloned().collect(),
            price_from: bound("price_from", &form.price_from),
            price_to: bound("price_to", &form.price_to),
            discount_only: form.discount,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.main_category) {
            return false;
        }

        let price = product.effective_price().amount();
        if self.price_from.is_some_and(|from| price < from) {
            return false;
        }
        if self.price_to.is_some_and(|to| price > to) {
            return false;
        }

        !(self.discount_only && !product.has_discount())
    }
}

/// Products matching `filters`, in input order.
pub fn apply_filters<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    products.iter().filter(|p| filters.matches(p)).collect()
}
