//! Order Table Service

use std::sync::Arc;

use shared::error::{AppError, AppResult};
use shared::models::{NewOrderTable, OrderStatus, OrderTable};

use super::rejected;
use crate::db::repository::{OrderRepository, OrderTableRepository};

#[derive(Clone)]
pub struct TableService {
    order_tables: Arc<dyn OrderTableRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl TableService {
    pub fn new(order_tables: Arc<dyn OrderTableRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self {
            order_tables,
            orders,
        }
    }

    pub async fn create(&self, order_table: NewOrderTable) -> AppResult<OrderTable> {
        let saved = self.order_tables.save(&order_table).await?;
        tracing::info!(order_table_id = saved.id(), empty = saved.is_empty(), "Order table created");
        Ok(saved)
    }

    pub async fn list(&self) -> AppResult<Vec<OrderTable>> {
        Ok(self.order_tables.find_all().await?)
    }

    /// Fails for grouped tables and for tables with a cooking or served order.
    pub async fn change_empty(&self, order_table_id: i64, empty: bool) -> AppResult<OrderTable> {
        let table = self.load(order_table_id, "table.change_empty").await?;
        let changed = table
            .with_empty(empty)
            .inspect_err(rejected("table.change_empty"))?;

        if self
            .orders
            .exists_by_order_table_id_in_and_order_status_in(&[order_table_id], &OrderStatus::ACTIVE)
            .await?
        {
            let err = AppError::invalid_argument(format!(
                "Table {order_table_id} has an order in progress"
            ))
            .with_detail("order_table_id", order_table_id);
            rejected("table.change_empty")(&err);
            return Err(err);
        }

        let saved = self.order_tables.update(&changed).await?;
        tracing::info!(order_table_id, empty, "Order table emptiness changed");
        Ok(saved)
    }

    /// Fails for negative counts and for empty tables.
    pub async fn change_number_of_guests(
        &self,
        order_table_id: i64,
        number_of_guests: i32,
    ) -> AppResult<OrderTable> {
        let table = self.load(order_table_id, "table.change_number_of_guests").await?;
        let changed = table
            .with_number_of_guests(number_of_guests)
            .inspect_err(rejected("table.change_number_of_guests"))?;

        let saved = self.order_tables.update(&changed).await?;
        tracing::info!(order_table_id, number_of_guests, "Order table guests changed");
        Ok(saved)
    }

    async fn load(&self, order_table_id: i64, use_case: &'static str) -> AppResult<OrderTable> {
        self.order_tables
            .find_by_id(order_table_id)
            .await?
            .ok_or_else(|| {
                AppError::invalid_argument(format!("Order table {order_table_id} does not exist"))
                    .with_detail("order_table_id", order_table_id)
            })
            .inspect_err(rejected(use_case))
    }
}
