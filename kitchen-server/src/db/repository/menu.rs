//! Menu Repository

use async_trait::async_trait;
use shared::models::{Menu, NewMenu};
use sqlx::SqlitePool;

use super::{MenuRepository, RepoResult, parse_price, placeholders};

#[derive(sqlx::FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    price: String,
    menu_group_id: i64,
}

impl MenuRow {
    fn into_menu(self) -> RepoResult<Menu> {
        Ok(Menu::restore(
            self.id,
            self.name,
            parse_price(&self.price)?,
            self.menu_group_id,
            Vec::new(),
        ))
    }
}

#[derive(Clone)]
pub struct SqliteMenuRepository {
    pool: SqlitePool,
}

impl SqliteMenuRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for SqliteMenuRepository {
    async fn save(&self, menu: &NewMenu) -> RepoResult<Menu> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO menu (name, price, menu_group_id) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(menu.name())
        .bind(menu.price().to_string())
        .bind(menu.menu_group_id())
        .fetch_one(&self.pool)
        .await?;
        Ok(Menu::restore(
            id,
            menu.name().to_string(),
            menu.price(),
            menu.menu_group_id(),
            Vec::new(),
        ))
    }

    async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        sqlx::query_as::<_, MenuRow>(
            "SELECT id, name, price, menu_group_id FROM menu ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(MenuRow::into_menu)
        .collect()
    }

    async fn count_by_id_in(&self, ids: &[i64]) -> RepoResult<i64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let sql = format!(
            "SELECT COUNT(*) FROM menu WHERE id IN ({})",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }
}
