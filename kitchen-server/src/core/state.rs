use std::sync::Arc;

use shared::error::AppError;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    SqliteMenuGroupRepository, SqliteMenuProductRepository, SqliteMenuRepository,
    SqliteOrderLineItemRepository, SqliteOrderRepository, SqliteOrderTableRepository,
    SqliteProductRepository, SqliteTableGroupRepository,
};
use crate::services::{
    MenuGroupService, MenuService, OrderService, ProductService, TableGroupService, TableService,
};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 每个服务内部都是 `Arc<dyn Repository>`，克隆成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | SQLite 连接池 |
/// | products / menu_groups / menus | 商品与菜单 |
/// | tables / table_groups | 桌台与拼桌 |
/// | orders | 订单 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    pub products: ProductService,
    pub menu_groups: MenuGroupService,
    pub menus: MenuService,
    pub tables: TableService,
    pub table_groups: TableGroupService,
    pub orders: OrderService,
}

impl ServerState {
    /// 打开数据库并装配所有服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        if config.database_path != crate::db::IN_MEMORY
            && let Some(parent) = std::path::Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::internal(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// 在已打开的数据库上装配服务 (SQLite 仓储)
    pub fn with_db(config: Config, db: DbService) -> Self {
        let pool = db.pool.clone();
        let products = Arc::new(SqliteProductRepository::new(pool.clone()));
        let menu_groups = Arc::new(SqliteMenuGroupRepository::new(pool.clone()));
        let menus = Arc::new(SqliteMenuRepository::new(pool.clone()));
        let menu_products = Arc::new(SqliteMenuProductRepository::new(pool.clone()));
        let order_tables = Arc::new(SqliteOrderTableRepository::new(pool.clone()));
        let table_groups = Arc::new(SqliteTableGroupRepository::new(pool.clone()));
        let orders = Arc::new(SqliteOrderRepository::new(pool.clone()));
        let order_line_items = Arc::new(SqliteOrderLineItemRepository::new(pool));

        Self {
            products: ProductService::new(products.clone()),
            menu_groups: MenuGroupService::new(menu_groups.clone()),
            menus: MenuService::new(menus.clone(), menu_groups, menu_products, products),
            tables: TableService::new(order_tables.clone(), orders.clone()),
            table_groups: TableGroupService::new(table_groups, order_tables.clone(), orders.clone()),
            orders: OrderService::new(orders, order_line_items, menus, order_tables),
            config,
            db,
        }
    }
}
