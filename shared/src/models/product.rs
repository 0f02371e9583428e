//! Product Model

use rust_decimal::Decimal;

use super::Price;
use crate::error::AppResult;
use crate::validation::{MAX_NAME_LEN, validate_required_text};

/// Product to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    price: Price,
}

impl NewProduct {
    /// Validates the name and rejects a negative price.
    pub fn new(name: impl Into<String>, price: Decimal) -> AppResult<Self> {
        let name = name.into();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        Ok(Self {
            name,
            price: Price::new(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// Stored product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: i64,
    name: String,
    price: Price,
}

impl Product {
    /// Rebuild a stored product.
    pub fn restore(id: i64, name: String, price: Price) -> Self {
        Self { id, name, price }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}
