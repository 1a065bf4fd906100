//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as JSON numbers (e.g. `109.95` or `695`) and are
//! converted to [`Decimal`] so cart totals never accumulate float error.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors when constructing a [`Price`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price in the catalog's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from an integer number of cents.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units, clamped to [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, quantity: u64) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

/// Format a decimal amount the way prices are shown (e.g. `$19.99`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_negative() {
        assert!(matches!(
            Price::from_cents(-1),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::from_cents(0).is_ok());
    }

    #[test]
    fn test_price_display_pads_cents() {
        assert_eq!(Price::from_cents(2200).unwrap().to_string(), "$22.00");
        assert_eq!(Price::from_cents(10995).unwrap().to_string(), "$109.95");
    }

    #[test]
    fn test_price_deserialize_float_and_integer() {
        let price: Price = serde_json::from_str("109.95").unwrap();
        assert_eq!(price, Price::from_cents(10995).unwrap());

        let price: Price = serde_json::from_str("695").unwrap();
        assert_eq!(price, Price::from_cents(69500).unwrap());
    }

    #[test]
    fn test_price_deserialize_negative_fails() {
        assert!(serde_json::from_str::<Price>("-3.5").is_err());
    }

    #[test]
    fn test_price_times_quantity() {
        let price = Price::from_cents(1999).unwrap();
        assert_eq!(format_amount(price.times(3)), "$59.97");
        assert_eq!(price.times(0), Decimal::ZERO);
    }

    #[test]
    fn test_price_times_clamps_on_overflow() {
        let price: Price = serde_json::from_str("50000000000000000000000000000").unwrap();
        assert_eq!(price.times(2), Decimal::MAX);
        assert!(format_amount(price.times(2)).ends_with(".00"));
    }
}
