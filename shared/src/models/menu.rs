//! Menu Model
//!
//! A menu bundles products (each with a quantity) under a menu group and sells
//! them for a single price. The price may discount the bundle but never exceed
//! the sum of its parts.

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::{Price, Product};
use crate::error::{AppError, AppResult};
use crate::validation::{MAX_NAME_LEN, validate_min, validate_required_text};

/// Product line of a menu to be stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMenuProduct {
    product_id: i64,
    quantity: i64,
}

impl NewMenuProduct {
    pub fn new(product_id: i64, quantity: i64) -> AppResult<Self> {
        validate_min(quantity, "quantity", 1)?;
        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Stored product line of a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuProduct {
    seq: i64,
    menu_id: i64,
    product_id: i64,
    quantity: i64,
}

impl MenuProduct {
    pub fn restore(seq: i64, menu_id: i64, product_id: i64, quantity: i64) -> Self {
        Self {
            seq,
            menu_id,
            product_id,
            quantity,
        }
    }

    pub fn seq(&self) -> i64 {
        self.seq
    }

    pub fn menu_id(&self) -> i64 {
        self.menu_id
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Menu to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
    name: String,
    price: Price,
    menu_group_id: i64,
    menu_products: Vec<NewMenuProduct>,
}

impl NewMenu {
    /// `price` is required and must not be negative.
    pub fn new(
        name: impl Into<String>,
        price: Option<Decimal>,
        menu_group_id: i64,
        menu_products: Vec<NewMenuProduct>,
    ) -> AppResult<Self> {
        let name = name.into();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        let price = price.ok_or_else(|| AppError::invalid_argument("Menu price is required"))?;
        Ok(Self {
            name,
            price: Price::new(price)?,
            menu_group_id,
            menu_products,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn menu_group_id(&self) -> i64 {
        self.menu_group_id
    }

    pub fn menu_products(&self) -> &[NewMenuProduct] {
        &self.menu_products
    }

    pub fn product_ids(&self) -> Vec<i64> {
        self.menu_products.iter().map(|mp| mp.product_id).collect()
    }

    /// Sum of `product price * quantity` over the menu's product lines.
    ///
    /// Every referenced product must be present in `products`.
    pub fn products_total(&self, products: &[Product]) -> AppResult<Price> {
        let by_id: HashMap<i64, &Product> = products.iter().map(|p| (p.id(), p)).collect();
        self.menu_products.iter().try_fold(Price::ZERO, |sum, mp| {
            let product = by_id.get(&mp.product_id).ok_or_else(|| {
                AppError::invalid_argument(format!("Product {} does not exist", mp.product_id))
                    .with_detail("product_id", mp.product_id)
            })?;
            sum.checked_add(product.price().times(mp.quantity)?)
        })
    }

    /// The menu price must not exceed the price of its parts.
    pub fn validate_price(&self, products: &[Product]) -> AppResult<()> {
        let total = self.products_total(products)?;
        if self.price > total {
            return Err(AppError::invalid_argument(format!(
                "Menu price {} exceeds the sum of its products {}",
                self.price, total
            ))
            .with_detail("price", self.price.to_string())
            .with_detail("products_total", total.to_string()));
        }
        Ok(())
    }
}

/// Stored menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    id: i64,
    name: String,
    price: Price,
    menu_group_id: i64,
    menu_products: Vec<MenuProduct>,
}

impl Menu {
    pub fn restore(
        id: i64,
        name: String,
        price: Price,
        menu_group_id: i64,
        menu_products: Vec<MenuProduct>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            menu_group_id,
            menu_products,
        }
    }

    /// Same menu with its product lines replaced.
    pub fn with_menu_products(self, menu_products: Vec<MenuProduct>) -> Self {
        Self {
            menu_products,
            ..self
        }
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

    pub fn menu_group_id(&self) -> i64 {
        self.menu_group_id
    }

    pub fn menu_products(&self) -> &[MenuProduct] {
        &self.menu_products
    }
}
