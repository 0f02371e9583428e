//! Product Service

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::{NewProduct, Product};

use crate::db::repository::ProductRepository;

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Name and price were validated by [`NewProduct::new`].
    pub async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let saved = self.products.save(&product).await?;
        tracing::info!(product_id = saved.id(), price = %saved.price(), "Product created");
        Ok(saved)
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.find_all().await?)
    }
}
