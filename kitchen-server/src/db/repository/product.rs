//! Product Repository

use async_trait::async_trait;
use shared::models::{NewProduct, Product};
use sqlx::SqlitePool;

use super::{ProductRepository, RepoResult, parse_price, placeholders};

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: String,
}

impl ProductRow {
    fn into_product(self) -> RepoResult<Product> {
        Ok(Product::restore(self.id, self.name, parse_price(&self.price)?))
    }
}

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn save(&self, product: &NewProduct) -> RepoResult<Product> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO product (name, price) VALUES (?, ?) RETURNING id",
        )
        .bind(product.name())
        .bind(product.price().to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(Product::restore(id, product.name().to_string(), product.price()))
    }

    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM product ORDER BY id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(ProductRow::into_product)
            .collect()
    }

    async fn find_all_by_id_in(&self, ids: &[i64]) -> RepoResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT id, name, price FROM product WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, ProductRow>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(ProductRow::into_product)
            .collect()
    }
}
