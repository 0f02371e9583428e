//! Table Group Service
//!
//! 拼桌: empty, ungrouped tables join a group. 解散: members leave the group
//! and come back occupied, unless one of them still has an order in progress.

use std::sync::Arc;

use shared::error::{AppError, AppResult};
use shared::models::{NewTableGroup, OrderStatus, OrderTable, TableGroup};

use super::rejected;
use crate::db::repository::{OrderRepository, OrderTableRepository, TableGroupRepository};

#[derive(Clone)]
pub struct TableGroupService {
    table_groups: Arc<dyn TableGroupRepository>,
    order_tables: Arc<dyn OrderTableRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl TableGroupService {
    pub fn new(
        table_groups: Arc<dyn TableGroupRepository>,
        order_tables: Arc<dyn OrderTableRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            table_groups,
            order_tables,
            orders,
        }
    }

    /// The members keep their `empty` flag; only the group id is stamped.
    pub async fn create(&self, table_group: NewTableGroup) -> AppResult<TableGroup> {
        let tables = self
            .order_tables
            .find_all_by_id_in(table_group.order_table_ids())
            .await?;
        table_group
            .check_members(&tables)
            .inspect_err(rejected("table_group.create"))?;

        let saved = self.table_groups.save(&table_group).await?;
        let mut members = Vec::with_capacity(tables.len());
        for table in &tables {
            let assigned = table.assigned_to(saved.id())?;
            members.push(self.order_tables.update(&assigned).await?);
        }

        tracing::info!(
            table_group_id = saved.id(),
            order_table_ids = ?table_group.order_table_ids(),
            "Table group created"
        );
        Ok(saved.with_order_tables(members))
    }

    /// Release every member of the group. The group row itself stays.
    pub async fn ungroup(&self, table_group_id: i64) -> AppResult<()> {
        if self.table_groups.find_by_id(table_group_id).await?.is_none() {
            let err = AppError::invalid_argument(format!(
                "Table group {table_group_id} does not exist"
            ))
            .with_detail("table_group_id", table_group_id);
            rejected("table_group.ungroup")(&err);
            return Err(err);
        }

        let members = self
            .order_tables
            .find_all_by_table_group_id(table_group_id)
            .await?;
        let ids: Vec<i64> = members.iter().map(OrderTable::id).collect();

        if self
            .orders
            .exists_by_order_table_id_in_and_order_status_in(&ids, &OrderStatus::ACTIVE)
            .await?
        {
            let err = AppError::invalid_argument(format!(
                "Table group {table_group_id} has an order in progress"
            ))
            .with_detail("table_group_id", table_group_id);
            rejected("table_group.ungroup")(&err);
            return Err(err);
        }

        for table in &members {
            self.order_tables.update(&table.released()).await?;
        }

        tracing::info!(table_group_id, order_table_ids = ?ids, "Table group ungrouped");
        Ok(())
    }
}
