//! Order Service
//!
//! 订单创建校验与状态流转 (COOKING → MEAL → COMPLETION)。

use std::sync::Arc;

use shared::error::{AppError, AppResult};
use shared::models::{NewOrder, Order, OrderStatus};

use super::rejected;
use crate::db::repository::{
    MenuRepository, OrderLineItemRepository, OrderRepository, OrderTableRepository,
};

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    order_line_items: Arc<dyn OrderLineItemRepository>,
    menus: Arc<dyn MenuRepository>,
    order_tables: Arc<dyn OrderTableRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        order_line_items: Arc<dyn OrderLineItemRepository>,
        menus: Arc<dyn MenuRepository>,
        order_tables: Arc<dyn OrderTableRepository>,
    ) -> Self {
        Self {
            orders,
            order_line_items,
            menus,
            order_tables,
        }
    }

    /// Every menu must exist and the table must exist and be seated.
    ///
    /// The order row is written first; each line item is then stamped with
    /// the new order id.
    pub async fn create(&self, order: NewOrder) -> AppResult<Order> {
        let found = self.menus.count_by_id_in(&order.menu_ids()).await?;
        order
            .check_menus_exist(found)
            .inspect_err(rejected("order.create"))?;

        let table = self
            .order_tables
            .find_by_id(order.order_table_id())
            .await?
            .ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "Order table {} does not exist",
                    order.order_table_id()
                ))
                .with_detail("order_table_id", order.order_table_id())
            })
            .inspect_err(rejected("order.create"))?;
        order
            .check_table(&table)
            .inspect_err(rejected("order.create"))?;

        let saved = self.orders.save(&order).await?;
        let mut items = Vec::with_capacity(order.line_items().len());
        for item in order.line_items() {
            items.push(self.order_line_items.save(saved.id(), item).await?);
        }

        tracing::info!(
            order_id = saved.id(),
            order_table_id = saved.order_table_id(),
            line_items = items.len(),
            "Order created"
        );
        Ok(saved.with_line_items(items))
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        let orders = self.orders.find_all().await?;
        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.order_line_items.find_all_by_order_id(order.id()).await?;
            result.push(order.with_line_items(items));
        }
        Ok(result)
    }

    /// Completed orders are frozen; any other status may move to `next`.
    pub async fn change_order_status(&self, order_id: i64, next: OrderStatus) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| {
                AppError::invalid_argument(format!("Order {order_id} does not exist"))
                    .with_detail("order_id", order_id)
            })
            .inspect_err(rejected("order.change_status"))?;

        let previous = order.order_status();
        let changed = order
            .with_status(next)
            .inspect_err(rejected("order.change_status"))?;
        let saved = self.orders.update(&changed).await?;
        let items = self.order_line_items.find_all_by_order_id(order_id).await?;

        tracing::info!(order_id, from = %previous, to = %next, "Order status changed");
        Ok(saved.with_line_items(items))
    }
}
