//! Order Table Model (桌台)
//!
//! Rules:
//! - a table can join a group only while it is empty and ungrouped
//! - the guest count cannot change while the table is empty
//! - emptiness cannot change while the table belongs to a group

use crate::error::{AppError, AppResult};
use crate::validation::validate_min;

/// Order table to be stored (never grouped on creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderTable {
    number_of_guests: i32,
    empty: bool,
}

impl NewOrderTable {
    pub fn new(number_of_guests: i32, empty: bool) -> AppResult<Self> {
        validate_min(i64::from(number_of_guests), "number_of_guests", 0)?;
        Ok(Self {
            number_of_guests,
            empty,
        })
    }

    pub fn number_of_guests(&self) -> i32 {
        self.number_of_guests
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

/// Stored order table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTable {
    id: i64,
    table_group_id: Option<i64>,
    number_of_guests: i32,
    empty: bool,
}

impl OrderTable {
    pub fn restore(
        id: i64,
        table_group_id: Option<i64>,
        number_of_guests: i32,
        empty: bool,
    ) -> Self {
        Self {
            id,
            table_group_id,
            number_of_guests,
            empty,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn table_group_id(&self) -> Option<i64> {
        self.table_group_id
    }

    pub fn number_of_guests(&self) -> i32 {
        self.number_of_guests
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }

    /// A table may join a group only while empty and not in another group.
    pub fn ensure_groupable(&self) -> AppResult<()> {
        if !self.empty {
            return Err(AppError::invalid_argument(format!(
                "Table {} is not empty and cannot be grouped",
                self.id
            ))
            .with_detail("order_table_id", self.id));
        }
        if let Some(group_id) = self.table_group_id {
            return Err(AppError::invalid_argument(format!(
                "Table {} already belongs to table group {group_id}",
                self.id
            ))
            .with_detail("order_table_id", self.id)
            .with_detail("table_group_id", group_id));
        }
        Ok(())
    }

    /// Stamp the group id on this table. Emptiness is left as is.
    pub fn assigned_to(&self, table_group_id: i64) -> AppResult<OrderTable> {
        self.ensure_groupable()?;
        Ok(Self {
            table_group_id: Some(table_group_id),
            ..*self
        })
    }

    /// Leave the group; the table comes back occupied.
    pub fn released(&self) -> OrderTable {
        Self {
            table_group_id: None,
            empty: false,
            ..*self
        }
    }

    pub fn with_empty(&self, empty: bool) -> AppResult<OrderTable> {
        if let Some(group_id) = self.table_group_id {
            return Err(AppError::invalid_argument(format!(
                "Table {} belongs to table group {group_id}; ungroup it first",
                self.id
            ))
            .with_detail("order_table_id", self.id));
        }
        Ok(Self { empty, ..*self })
    }

    pub fn with_number_of_guests(&self, number_of_guests: i32) -> AppResult<OrderTable> {
        validate_min(i64::from(number_of_guests), "number_of_guests", 0)?;
        if self.empty {
            return Err(AppError::invalid_argument(format!(
                "Table {} is empty; seat it before changing the guest count",
                self.id
            ))
            .with_detail("order_table_id", self.id));
        }
        Ok(Self {
            number_of_guests,
            ..*self
        })
    }
}
