//! Order Line Item Repository

use async_trait::async_trait;
use shared::models::{NewOrderLineItem, OrderLineItem};
use sqlx::SqlitePool;

use super::{OrderLineItemRepository, RepoResult};

#[derive(Clone)]
pub struct SqliteOrderLineItemRepository {
    pool: SqlitePool,
}

impl SqliteOrderLineItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderLineItemRepository for SqliteOrderLineItemRepository {
    async fn save(&self, order_id: i64, line_item: &NewOrderLineItem) -> RepoResult<OrderLineItem> {
        let seq = sqlx::query_scalar::<_, i64>(
            "INSERT INTO order_line_item (order_id, menu_id, quantity) VALUES (?, ?, ?) RETURNING seq",
        )
        .bind(order_id)
        .bind(line_item.menu_id())
        .bind(line_item.quantity())
        .fetch_one(&self.pool)
        .await?;
        Ok(OrderLineItem::restore(
            seq,
            order_id,
            line_item.menu_id(),
            line_item.quantity(),
        ))
    }

    async fn find_all_by_order_id(&self, order_id: i64) -> RepoResult<Vec<OrderLineItem>> {
        let rows = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            "SELECT seq, order_id, menu_id, quantity FROM order_line_item WHERE order_id = ? ORDER BY seq",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(seq, order_id, menu_id, quantity)| {
                OrderLineItem::restore(seq, order_id, menu_id, quantity)
            })
            .collect())
    }
}
