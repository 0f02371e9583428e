//! Menu Product Repository

use async_trait::async_trait;
use shared::models::{MenuProduct, NewMenuProduct};
use sqlx::SqlitePool;

use super::{MenuProductRepository, RepoResult};

#[derive(Clone)]
pub struct SqliteMenuProductRepository {
    pool: SqlitePool,
}

impl SqliteMenuProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuProductRepository for SqliteMenuProductRepository {
    async fn save(&self, menu_id: i64, menu_product: &NewMenuProduct) -> RepoResult<MenuProduct> {
        let seq = sqlx::query_scalar::<_, i64>(
            "INSERT INTO menu_product (menu_id, product_id, quantity) VALUES (?, ?, ?) RETURNING seq",
        )
        .bind(menu_id)
        .bind(menu_product.product_id())
        .bind(menu_product.quantity())
        .fetch_one(&self.pool)
        .await?;
        Ok(MenuProduct::restore(
            seq,
            menu_id,
            menu_product.product_id(),
            menu_product.quantity(),
        ))
    }

    async fn find_all_by_menu_id(&self, menu_id: i64) -> RepoResult<Vec<MenuProduct>> {
        let rows = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            "SELECT seq, menu_id, product_id, quantity FROM menu_product WHERE menu_id = ? ORDER BY seq",
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(seq, menu_id, product_id, quantity)| {
                MenuProduct::restore(seq, menu_id, product_id, quantity)
            })
            .collect())
    }
}
