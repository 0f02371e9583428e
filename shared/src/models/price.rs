//! Price value object

use rust_decimal::Decimal;
use std::fmt;

use crate::error::{AppError, AppResult};

/// Non-negative monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Rejects negative amounts.
    pub fn new(amount: Decimal) -> AppResult<Self> {
        if amount < Decimal::ZERO {
            return Err(AppError::invalid_argument(format!(
                "Price must not be negative: {amount}"
            ))
            .with_detail("price", amount.to_string()));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// `self * quantity`
    pub fn times(&self, quantity: i64) -> AppResult<Price> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Price)
            .ok_or_else(|| AppError::invalid_argument("Price overflow"))
    }

    pub fn checked_add(&self, other: Price) -> AppResult<Price> {
        self.0
            .checked_add(other.0)
            .map(Price)
            .ok_or_else(|| AppError::invalid_argument("Price overflow"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_negative_price_rejected() {
        for raw in ["-1", "-0.01", "-16000"] {
            let err = Price::new(Decimal::from_str(raw).unwrap()).unwrap_err();
            assert!(err.is_invalid_argument(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_zero_and_positive_accepted() {
        for raw in ["0", "0.00", "1000", "16000.50"] {
            let price = Price::new(Decimal::from_str(raw).unwrap()).unwrap();
            assert_eq!(price.amount(), Decimal::from_str(raw).unwrap());
        }
    }

    #[test]
    fn test_times_and_add() {
        let price = Price::new(Decimal::from(16000)).unwrap();
        let doubled = price.times(2).unwrap();
        assert_eq!(doubled.amount(), Decimal::from(32000));
        let sum = doubled.checked_add(price).unwrap();
        assert_eq!(sum.amount(), Decimal::from(48000));
    }
}
