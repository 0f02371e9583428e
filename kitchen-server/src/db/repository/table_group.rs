//! Table Group Repository

use async_trait::async_trait;
use shared::models::{NewTableGroup, TableGroup};
use sqlx::SqlitePool;

use super::{RepoResult, TableGroupRepository};

#[derive(Clone)]
pub struct SqliteTableGroupRepository {
    pool: SqlitePool,
}

impl SqliteTableGroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableGroupRepository for SqliteTableGroupRepository {
    async fn save(&self, table_group: &NewTableGroup) -> RepoResult<TableGroup> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO table_group (created_date) VALUES (?) RETURNING id",
        )
        .bind(table_group.created_date())
        .fetch_one(&self.pool)
        .await?;
        Ok(TableGroup::restore(id, table_group.created_date(), Vec::new()))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<TableGroup>> {
        let row = sqlx::query_as::<_, (i64, i64)>(
            "SELECT id, created_date FROM table_group WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, created_date)| TableGroup::restore(id, created_date, Vec::new())))
    }
}
