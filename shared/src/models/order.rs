//! Order Model
//!
//! Status lifecycle: `COOKING` → `MEAL` → `COMPLETION`. Any status except
//! `COMPLETION` may move to any status (including itself); a completed order
//! is frozen.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::OrderTable;
use crate::error::{AppError, AppResult};
use crate::validation::validate_min;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    /// Statuses that keep a table busy
    pub const ACTIVE: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        }
    }

    /// Fails when the current status is `COMPLETION`, whatever `next` is.
    pub fn transition_to(self, next: OrderStatus) -> AppResult<OrderStatus> {
        if self == OrderStatus::Completion {
            return Err(AppError::invalid_argument(
                "Order is already completed; its status cannot change",
            )
            .with_detail("order_status", self.as_str())
            .with_detail("requested", next.as_str()));
        }
        Ok(next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COOKING" => Ok(OrderStatus::Cooking),
            "MEAL" => Ok(OrderStatus::Meal),
            "COMPLETION" => Ok(OrderStatus::Completion),
            other => Err(AppError::invalid_argument(format!(
                "Unknown order status: {other}"
            ))),
        }
    }
}

/// Line item to be stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLineItem {
    menu_id: i64,
    quantity: i64,
}

impl NewOrderLineItem {
    pub fn new(menu_id: i64, quantity: i64) -> AppResult<Self> {
        validate_min(quantity, "quantity", 1)?;
        Ok(Self { menu_id, quantity })
    }

    pub fn menu_id(&self) -> i64 {
        self.menu_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Stored line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLineItem {
    seq: i64,
    order_id: i64,
    menu_id: i64,
    quantity: i64,
}

impl OrderLineItem {
    pub fn restore(seq: i64, order_id: i64, menu_id: i64, quantity: i64) -> Self {
        Self {
            seq,
            order_id,
            menu_id,
            quantity,
        }
    }

    pub fn seq(&self) -> i64 {
        self.seq
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn menu_id(&self) -> i64 {
        self.menu_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Order to be stored, always starting in `COOKING`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    order_table_id: i64,
    ordered_time: i64,
    line_items: Vec<NewOrderLineItem>,
}

impl NewOrder {
    pub fn new(
        order_table_id: i64,
        line_items: Vec<NewOrderLineItem>,
        ordered_time: i64,
    ) -> AppResult<Self> {
        if line_items.is_empty() {
            return Err(AppError::invalid_argument(
                "An order needs at least one line item",
            ));
        }
        Ok(Self {
            order_table_id,
            ordered_time,
            line_items,
        })
    }

    pub fn order_table_id(&self) -> i64 {
        self.order_table_id
    }

    pub fn order_status(&self) -> OrderStatus {
        OrderStatus::Cooking
    }

    pub fn ordered_time(&self) -> i64 {
        self.ordered_time
    }

    pub fn line_items(&self) -> &[NewOrderLineItem] {
        &self.line_items
    }

    /// Distinct menu ids, ascending
    pub fn menu_ids(&self) -> Vec<i64> {
        self.line_items
            .iter()
            .map(NewOrderLineItem::menu_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `found` is the number of stored menus among [`Self::menu_ids`]. It must
    /// match the number of line items, so repeating a menu across two line
    /// items is rejected as well.
    pub fn check_menus_exist(&self, found: i64) -> AppResult<()> {
        let expected = self.line_items.len() as i64;
        if found != expected {
            return Err(AppError::invalid_argument(format!(
                "Order references unknown menus ({found} found for {expected} line items)"
            ))
            .with_detail("menu_ids", self.menu_ids()));
        }
        Ok(())
    }

    pub fn check_table(&self, table: &OrderTable) -> AppResult<()> {
        if table.is_empty() {
            return Err(AppError::invalid_argument(format!(
                "Table {} is empty; orders need a seated table",
                table.id()
            ))
            .with_detail("order_table_id", table.id()));
        }
        Ok(())
    }
}

/// Stored order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: i64,
    order_table_id: i64,
    order_status: OrderStatus,
    ordered_time: i64,
    line_items: Vec<OrderLineItem>,
}

impl Order {
    pub fn restore(
        id: i64,
        order_table_id: i64,
        order_status: OrderStatus,
        ordered_time: i64,
        line_items: Vec<OrderLineItem>,
    ) -> Self {
        Self {
            id,
            order_table_id,
            order_status,
            ordered_time,
            line_items,
        }
    }

    /// New order value carrying `next`; fails for completed orders.
    pub fn with_status(&self, next: OrderStatus) -> AppResult<Order> {
        let order_status = self.order_status.transition_to(next)?;
        Ok(Self {
            order_status,
            ..self.clone()
        })
    }

    pub fn with_line_items(self, line_items: Vec<OrderLineItem>) -> Self {
        Self { line_items, ..self }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn order_table_id(&self) -> i64 {
        self.order_table_id
    }

    pub fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    pub fn ordered_time(&self) -> i64 {
        self.ordered_time
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }
}
