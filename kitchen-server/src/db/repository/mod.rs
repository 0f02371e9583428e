//! Repository Module
//!
//! Persistence seams consumed by the service layer. Each aggregate gets an
//! async trait; the `Sqlite*` types implement them over a shared `SqlitePool`.
//! Services hold the traits as `Arc<dyn ...>` so tests can swap in fakes.

// Catalog
pub mod menu;
pub mod menu_group;
pub mod menu_product;
pub mod product;

// Tables
pub mod order_table;
pub mod table_group;

// Orders
pub mod order;
pub mod order_line_item;

// Re-exports
pub use menu::SqliteMenuRepository;
pub use menu_group::SqliteMenuGroupRepository;
pub use menu_product::SqliteMenuProductRepository;
pub use order::SqliteOrderRepository;
pub use order_line_item::SqliteOrderLineItemRepository;
pub use order_table::SqliteOrderTableRepository;
pub use product::SqliteProductRepository;
pub use table_group::SqliteTableGroupRepository;

use async_trait::async_trait;
use shared::models::{
    Menu, MenuGroup, MenuProduct, NewMenu, NewMenuGroup, NewMenuProduct, NewOrder,
    NewOrderLineItem, NewOrderTable, NewProduct, NewTableGroup, Order, OrderLineItem,
    OrderStatus, OrderTable, Product, TableGroup,
};
use rust_decimal::Decimal;
use shared::models::Price;
use std::str::FromStr;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Stored row could not be turned back into a domain value
    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// `?, ?, ?` for an `IN (...)` clause with `n` binds
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Prices are stored as decimal text to keep them exact
pub(crate) fn parse_price(raw: &str) -> RepoResult<Price> {
    let amount = Decimal::from_str(raw)
        .map_err(|e| RepoError::Corrupt(format!("price {raw:?}: {e}")))?;
    Price::new(amount).map_err(|e| RepoError::Corrupt(e.message))
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: &NewProduct) -> RepoResult<Product>;
    async fn find_all(&self) -> RepoResult<Vec<Product>>;
    async fn find_all_by_id_in(&self, ids: &[i64]) -> RepoResult<Vec<Product>>;
}

#[async_trait]
pub trait MenuGroupRepository: Send + Sync {
    async fn save(&self, menu_group: &NewMenuGroup) -> RepoResult<MenuGroup>;
    async fn find_all(&self) -> RepoResult<Vec<MenuGroup>>;
    async fn exists_by_id(&self, id: i64) -> RepoResult<bool>;
}

/// Menus come back without their product lines; see [`MenuProductRepository`].
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn save(&self, menu: &NewMenu) -> RepoResult<Menu>;
    async fn find_all(&self) -> RepoResult<Vec<Menu>>;
    /// Number of stored menus among `ids`
    async fn count_by_id_in(&self, ids: &[i64]) -> RepoResult<i64>;
}

#[async_trait]
pub trait MenuProductRepository: Send + Sync {
    async fn save(&self, menu_id: i64, menu_product: &NewMenuProduct) -> RepoResult<MenuProduct>;
    async fn find_all_by_menu_id(&self, menu_id: i64) -> RepoResult<Vec<MenuProduct>>;
}

#[async_trait]
pub trait OrderTableRepository: Send + Sync {
    async fn save(&self, order_table: &NewOrderTable) -> RepoResult<OrderTable>;
    /// Overwrite the stored row with `order_table`
    async fn update(&self, order_table: &OrderTable) -> RepoResult<OrderTable>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrderTable>>;
    async fn find_all(&self) -> RepoResult<Vec<OrderTable>>;
    async fn find_all_by_id_in(&self, ids: &[i64]) -> RepoResult<Vec<OrderTable>>;
    async fn find_all_by_table_group_id(&self, table_group_id: i64) -> RepoResult<Vec<OrderTable>>;
}

/// Groups come back without their member tables.
#[async_trait]
pub trait TableGroupRepository: Send + Sync {
    async fn save(&self, table_group: &NewTableGroup) -> RepoResult<TableGroup>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<TableGroup>>;
}

/// Orders come back without their line items; see [`OrderLineItemRepository`].
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &NewOrder) -> RepoResult<Order>;
    async fn update(&self, order: &Order) -> RepoResult<Order>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>>;
    async fn find_all(&self) -> RepoResult<Vec<Order>>;
    /// Whether any order on one of `order_table_ids` is in one of `statuses`
    async fn exists_by_order_table_id_in_and_order_status_in(
        &self,
        order_table_ids: &[i64],
        statuses: &[OrderStatus],
    ) -> RepoResult<bool>;
}

#[async_trait]
pub trait OrderLineItemRepository: Send + Sync {
    async fn save(&self, order_id: i64, line_item: &NewOrderLineItem) -> RepoResult<OrderLineItem>;
    async fn find_all_by_order_id(&self, order_id: i64) -> RepoResult<Vec<OrderLineItem>>;
}
