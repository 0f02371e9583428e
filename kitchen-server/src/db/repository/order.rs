//! Order Repository

use async_trait::async_trait;
use shared::models::{NewOrder, Order, OrderStatus};
use sqlx::SqlitePool;

use super::{OrderRepository, RepoError, RepoResult, placeholders};

const COLUMNS: &str = "id, order_table_id, order_status, ordered_time";

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    order_table_id: i64,
    order_status: String,
    ordered_time: i64,
}

impl OrderRow {
    fn into_order(self) -> RepoResult<Order> {
        let status: OrderStatus = self
            .order_status
            .parse()
            .map_err(|e: shared::AppError| RepoError::Corrupt(e.message))?;
        Ok(Order::restore(
            self.id,
            self.order_table_id,
            status,
            self.ordered_time,
            Vec::new(),
        ))
    }
}

#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn save(&self, order: &NewOrder) -> RepoResult<Order> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO orders (order_table_id, order_status, ordered_time) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(order.order_table_id())
        .bind(order.order_status().as_str())
        .bind(order.ordered_time())
        .fetch_one(&self.pool)
        .await?;
        Ok(Order::restore(
            id,
            order.order_table_id(),
            order.order_status(),
            order.ordered_time(),
            Vec::new(),
        ))
    }

    async fn update(&self, order: &Order) -> RepoResult<Order> {
        let rows = sqlx::query(
            "UPDATE orders SET order_table_id = ?, order_status = ?, ordered_time = ? WHERE id = ?",
        )
        .bind(order.order_table_id())
        .bind(order.order_status().as_str())
        .bind(order.ordered_time())
        .bind(order.id())
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Order {} not found", order.id())));
        }
        Ok(order.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let sql = format!("SELECT {COLUMNS} FROM orders WHERE id = ?");
        sqlx::query_as::<_, OrderRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(OrderRow::into_order)
            .transpose()
    }

    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let sql = format!("SELECT {COLUMNS} FROM orders ORDER BY id");
        sqlx::query_as::<_, OrderRow>(&sql)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(OrderRow::into_order)
            .collect()
    }

    async fn exists_by_order_table_id_in_and_order_status_in(
        &self,
        order_table_ids: &[i64],
        statuses: &[OrderStatus],
    ) -> RepoResult<bool> {
        if order_table_ids.is_empty() || statuses.is_empty() {
            return Ok(false);
        }
        let sql = format!(
            "SELECT COUNT(*) FROM orders WHERE order_table_id IN ({}) AND order_status IN ({})",
            placeholders(order_table_ids.len()),
            placeholders(statuses.len())
        );
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for id in order_table_ids {
            query = query.bind(*id);
        }
        for status in statuses {
            query = query.bind(status.as_str());
        }
        Ok(query.fetch_one(&self.pool).await? > 0)
    }
}
