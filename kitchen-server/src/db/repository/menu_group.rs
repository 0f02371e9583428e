//! Menu Group Repository

use async_trait::async_trait;
use shared::models::{MenuGroup, NewMenuGroup};
use sqlx::SqlitePool;

use super::{MenuGroupRepository, RepoResult};

#[derive(Clone)]
pub struct SqliteMenuGroupRepository {
    pool: SqlitePool,
}

impl SqliteMenuGroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuGroupRepository for SqliteMenuGroupRepository {
    async fn save(&self, menu_group: &NewMenuGroup) -> RepoResult<MenuGroup> {
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO menu_group (name) VALUES (?) RETURNING id")
            .bind(menu_group.name())
            .fetch_one(&self.pool)
            .await?;
        Ok(MenuGroup::restore(id, menu_group.name().to_string()))
    }

    async fn find_all(&self) -> RepoResult<Vec<MenuGroup>> {
        let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM menu_group ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| MenuGroup::restore(id, name))
            .collect())
    }

    async fn exists_by_id(&self, id: i64) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_group WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
