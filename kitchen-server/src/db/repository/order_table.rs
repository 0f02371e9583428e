//! Order Table Repository

use async_trait::async_trait;
use shared::models::{NewOrderTable, OrderTable};
use sqlx::SqlitePool;

use super::{OrderTableRepository, RepoError, RepoResult, placeholders};

const COLUMNS: &str = "id, table_group_id, number_of_guests, empty";

#[derive(sqlx::FromRow)]
struct OrderTableRow {
    id: i64,
    table_group_id: Option<i64>,
    number_of_guests: i32,
    empty: bool,
}

impl From<OrderTableRow> for OrderTable {
    fn from(row: OrderTableRow) -> Self {
        OrderTable::restore(row.id, row.table_group_id, row.number_of_guests, row.empty)
    }
}

#[derive(Clone)]
pub struct SqliteOrderTableRepository {
    pool: SqlitePool,
}

impl SqliteOrderTableRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderTableRepository for SqliteOrderTableRepository {
    async fn save(&self, order_table: &NewOrderTable) -> RepoResult<OrderTable> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO order_table (table_group_id, number_of_guests, empty) VALUES (NULL, ?, ?) RETURNING id",
        )
        .bind(order_table.number_of_guests())
        .bind(order_table.is_empty())
        .fetch_one(&self.pool)
        .await?;
        Ok(OrderTable::restore(
            id,
            None,
            order_table.number_of_guests(),
            order_table.is_empty(),
        ))
    }

    async fn update(&self, order_table: &OrderTable) -> RepoResult<OrderTable> {
        let rows = sqlx::query(
            "UPDATE order_table SET table_group_id = ?, number_of_guests = ?, empty = ? WHERE id = ?",
        )
        .bind(order_table.table_group_id())
        .bind(order_table.number_of_guests())
        .bind(order_table.is_empty())
        .bind(order_table.id())
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Order table {} not found",
                order_table.id()
            )));
        }
        Ok(*order_table)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrderTable>> {
        let sql = format!("SELECT {COLUMNS} FROM order_table WHERE id = ?");
        let row = sqlx::query_as::<_, OrderTableRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(OrderTable::from))
    }

    async fn find_all(&self) -> RepoResult<Vec<OrderTable>> {
        let sql = format!("SELECT {COLUMNS} FROM order_table ORDER BY id");
        let rows = sqlx::query_as::<_, OrderTableRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(OrderTable::from).collect())
    }

    async fn find_all_by_id_in(&self, ids: &[i64]) -> RepoResult<Vec<OrderTable>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {COLUMNS} FROM order_table WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, OrderTableRow>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(OrderTable::from).collect())
    }

    async fn find_all_by_table_group_id(&self, table_group_id: i64) -> RepoResult<Vec<OrderTable>> {
        let sql = format!("SELECT {COLUMNS} FROM order_table WHERE table_group_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, OrderTableRow>(&sql)
            .bind(table_group_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(OrderTable::from).collect())
    }
}
