//! Table Group Model (단체 지정)

use std::collections::HashSet;

use super::OrderTable;
use crate::error::{AppError, AppResult};

/// Minimum number of tables in a group
pub const MIN_GROUP_TABLES: usize = 2;

/// Table group to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTableGroup {
    created_date: i64,
    order_table_ids: Vec<i64>,
}

impl NewTableGroup {
    /// Requires at least two distinct table ids.
    pub fn new(created_date: i64, order_table_ids: Vec<i64>) -> AppResult<Self> {
        if order_table_ids.len() < MIN_GROUP_TABLES {
            return Err(AppError::invalid_argument(format!(
                "A table group needs at least {MIN_GROUP_TABLES} tables (got {})",
                order_table_ids.len()
            )));
        }
        let distinct: HashSet<i64> = order_table_ids.iter().copied().collect();
        if distinct.len() != order_table_ids.len() {
            return Err(AppError::invalid_argument(
                "A table group cannot list the same table twice",
            ));
        }
        Ok(Self {
            created_date,
            order_table_ids,
        })
    }

    pub fn created_date(&self) -> i64 {
        self.created_date
    }

    pub fn order_table_ids(&self) -> &[i64] {
        &self.order_table_ids
    }

    /// Every requested table must have been found, and each must be groupable.
    pub fn check_members(&self, found: &[OrderTable]) -> AppResult<()> {
        if found.len() != self.order_table_ids.len() {
            let found_ids: HashSet<i64> = found.iter().map(OrderTable::id).collect();
            let missing: Vec<i64> = self
                .order_table_ids
                .iter()
                .copied()
                .filter(|id| !found_ids.contains(id))
                .collect();
            return Err(AppError::invalid_argument(format!(
                "Order tables do not exist: {missing:?}"
            ))
            .with_detail("missing", missing));
        }
        found.iter().try_for_each(OrderTable::ensure_groupable)
    }
}

/// Stored table group with its member tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    id: i64,
    created_date: i64,
    order_tables: Vec<OrderTable>,
}

impl TableGroup {
    pub fn restore(id: i64, created_date: i64, order_tables: Vec<OrderTable>) -> Self {
        Self {
            id,
            created_date,
            order_tables,
        }
    }

    pub fn with_order_tables(self, order_tables: Vec<OrderTable>) -> Self {
        Self {
            order_tables,
            ..self
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn created_date(&self) -> i64 {
        self.created_date
    }

    pub fn order_tables(&self) -> &[OrderTable] {
        &self.order_tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_than_two_tables_rejected() {
        assert!(NewTableGroup::new(0, vec![]).is_err());
        assert!(NewTableGroup::new(0, vec![1]).is_err());
        assert!(NewTableGroup::new(0, vec![1, 2]).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = NewTableGroup::new(0, vec![1, 1]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_check_members_missing_table() {
        let group = NewTableGroup::new(0, vec![1, 2]).unwrap();
        let found = [OrderTable::restore(1, None, 2, true)];
        let err = group.check_members(&found).unwrap_err();
        assert_eq!(
            err.details.unwrap().get("missing").unwrap(),
            &serde_json::json!([2])
        );
    }

    #[test]
    fn test_check_members_rejects_occupied_or_grouped() {
        let group = NewTableGroup::new(0, vec![1, 2]).unwrap();

        let occupied = [
            OrderTable::restore(1, None, 2, false),
            OrderTable::restore(2, None, 3, false),
        ];
        assert!(group.check_members(&occupied).is_err());

        let grouped = [
            OrderTable::restore(1, Some(1), 2, true),
            OrderTable::restore(2, Some(1), 3, true),
        ];
        assert!(group.check_members(&grouped).is_err());
    }

    #[test]
    fn test_check_members_accepts_empty_ungrouped() {
        let group = NewTableGroup::new(0, vec![1, 2]).unwrap();
        let tables = [
            OrderTable::restore(1, None, 2, true),
            OrderTable::restore(2, None, 3, true),
        ];
        assert!(group.check_members(&tables).is_ok());
    }
}
