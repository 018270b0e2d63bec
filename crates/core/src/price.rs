//! Price value object.
//!
//! Prices are plain non-negative amounts. There is no currency or locale
//! handling: the unit is whatever the catalog source delivers.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A finite, non-negative amount.
///
/// Equality and ordering are total (backed by [`f64::total_cmp`]), which is
/// what the catalog sort needs. Construction rejects NaN and infinities, so the
/// total order coincides with the numeric one.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!("price must be finite, got {amount}")));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative, got {amount}"
            )));
        }
        // Normalize -0.0 so equality stays numeric.
        Ok(Self(amount + 0.0))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("price {s:?}: {e}")))?;
        Price::new(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
