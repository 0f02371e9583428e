//! In-memory repositories for service tests

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::{
    Menu, MenuGroup, MenuProduct, NewMenu, NewMenuGroup, NewMenuProduct, NewOrder,
    NewOrderLineItem, NewOrderTable, NewProduct, NewTableGroup, Order, OrderLineItem,
    OrderStatus, OrderTable, Product, TableGroup,
};

use crate::db::repository::{
    MenuGroupRepository, MenuProductRepository, MenuRepository, OrderLineItemRepository,
    OrderRepository, OrderTableRepository, ProductRepository, RepoError, RepoResult,
    TableGroupRepository,
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    products: BTreeMap<i64, Product>,
    menu_groups: BTreeMap<i64, MenuGroup>,
    menus: BTreeMap<i64, Menu>,
    menu_products: BTreeMap<i64, MenuProduct>,
    order_tables: BTreeMap<i64, OrderTable>,
    table_groups: BTreeMap<i64, TableGroup>,
    orders: BTreeMap<i64, Order>,
    order_line_items: BTreeMap<i64, OrderLineItem>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Every repository trait over one mutex-guarded set of maps
#[derive(Default)]
pub struct FakeDb {
    tables: Mutex<Tables>,
}

impl FakeDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store `table` under a fresh id, keeping its group, guests and emptiness
    pub fn insert_order_table(&self, table: OrderTable) -> OrderTable {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored = OrderTable::restore(
            id,
            table.table_group_id(),
            table.number_of_guests(),
            table.is_empty(),
        );
        tables.order_tables.insert(id, stored);
        stored
    }

    pub fn order_table(&self, id: i64) -> Option<OrderTable> {
        self.tables.lock().order_tables.get(&id).copied()
    }

    pub fn order(&self, id: i64) -> Option<Order> {
        self.tables.lock().orders.get(&id).cloned()
    }
}

#[async_trait]
impl ProductRepository for FakeDb {
    async fn save(&self, product: &NewProduct) -> RepoResult<Product> {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored = Product::restore(id, product.name().to_string(), product.price());
        tables.products.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.tables.lock().products.values().cloned().collect())
    }

    async fn find_all_by_id_in(&self, ids: &[i64]) -> RepoResult<Vec<Product>> {
        let tables = self.tables.lock();
        Ok(tables
            .products
            .values()
            .filter(|p| ids.contains(&p.id()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MenuGroupRepository for FakeDb {
    async fn save(&self, menu_group: &NewMenuGroup) -> RepoResult<MenuGroup> {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored = MenuGroup::restore(id, menu_group.name().to_string());
        tables.menu_groups.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> RepoResult<Vec<MenuGroup>> {
        Ok(self.tables.lock().menu_groups.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> RepoResult<bool> {
        Ok(self.tables.lock().menu_groups.contains_key(&id))
    }
}

#[async_trait]
impl MenuRepository for FakeDb {
    async fn save(&self, menu: &NewMenu) -> RepoResult<Menu> {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored = Menu::restore(
            id,
            menu.name().to_string(),
            menu.price(),
            menu.menu_group_id(),
            Vec::new(),
        );
        tables.menus.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        Ok(self.tables.lock().menus.values().cloned().collect())
    }

    async fn count_by_id_in(&self, ids: &[i64]) -> RepoResult<i64> {
        let tables = self.tables.lock();
        Ok(ids.iter().filter(|id| tables.menus.contains_key(*id)).count() as i64)
    }
}

#[async_trait]
impl MenuProductRepository for FakeDb {
    async fn save(&self, menu_id: i64, menu_product: &NewMenuProduct) -> RepoResult<MenuProduct> {
        let mut tables = self.tables.lock();
        let seq = tables.next_id();
        let stored = MenuProduct::restore(
            seq,
            menu_id,
            menu_product.product_id(),
            menu_product.quantity(),
        );
        tables.menu_products.insert(seq, stored);
        Ok(stored)
    }

    async fn find_all_by_menu_id(&self, menu_id: i64) -> RepoResult<Vec<MenuProduct>> {
        let tables = self.tables.lock();
        Ok(tables
            .menu_products
            .values()
            .filter(|mp| mp.menu_id() == menu_id)
            .copied()
            .collect())
    }
}

#[async_trait]
impl OrderTableRepository for FakeDb {
    async fn save(&self, order_table: &NewOrderTable) -> RepoResult<OrderTable> {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored =
            OrderTable::restore(id, None, order_table.number_of_guests(), order_table.is_empty());
        tables.order_tables.insert(id, stored);
        Ok(stored)
    }

    async fn update(&self, order_table: &OrderTable) -> RepoResult<OrderTable> {
        let mut tables = self.tables.lock();
        match tables.order_tables.get_mut(&order_table.id()) {
            Some(slot) => {
                *slot = *order_table;
                Ok(*order_table)
            }
            None => Err(RepoError::NotFound(format!(
                "Order table {} not found",
                order_table.id()
            ))),
        }
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrderTable>> {
        Ok(self.order_table(id))
    }

    async fn find_all(&self) -> RepoResult<Vec<OrderTable>> {
        Ok(self.tables.lock().order_tables.values().copied().collect())
    }

    async fn find_all_by_id_in(&self, ids: &[i64]) -> RepoResult<Vec<OrderTable>> {
        let tables = self.tables.lock();
        Ok(tables
            .order_tables
            .values()
            .filter(|t| ids.contains(&t.id()))
            .copied()
            .collect())
    }

    async fn find_all_by_table_group_id(&self, table_group_id: i64) -> RepoResult<Vec<OrderTable>> {
        let tables = self.tables.lock();
        Ok(tables
            .order_tables
            .values()
            .filter(|t| t.table_group_id() == Some(table_group_id))
            .copied()
            .collect())
    }
}

#[async_trait]
impl TableGroupRepository for FakeDb {
    async fn save(&self, table_group: &NewTableGroup) -> RepoResult<TableGroup> {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored = TableGroup::restore(id, table_group.created_date(), Vec::new());
        tables.table_groups.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<TableGroup>> {
        Ok(self.tables.lock().table_groups.get(&id).cloned())
    }
}

#[async_trait]
impl OrderRepository for FakeDb {
    async fn save(&self, order: &NewOrder) -> RepoResult<Order> {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let stored = Order::restore(
            id,
            order.order_table_id(),
            order.order_status(),
            order.ordered_time(),
            Vec::new(),
        );
        tables.orders.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, order: &Order) -> RepoResult<Order> {
        let mut tables = self.tables.lock();
        match tables.orders.get_mut(&order.id()) {
            Some(slot) => {
                // line items live in their own table
                *slot = order.clone().with_line_items(Vec::new());
                Ok(order.clone())
            }
            None => Err(RepoError::NotFound(format!("Order {} not found", order.id()))),
        }
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        Ok(self.order(id))
    }

    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        Ok(self.tables.lock().orders.values().cloned().collect())
    }

    async fn exists_by_order_table_id_in_and_order_status_in(
        &self,
        order_table_ids: &[i64],
        statuses: &[OrderStatus],
    ) -> RepoResult<bool> {
        let tables = self.tables.lock();
        Ok(tables.orders.values().any(|o| {
            order_table_ids.contains(&o.order_table_id()) && statuses.contains(&o.order_status())
        }))
    }
}

#[async_trait]
impl OrderLineItemRepository for FakeDb {
    async fn save(&self, order_id: i64, line_item: &NewOrderLineItem) -> RepoResult<OrderLineItem> {
        let mut tables = self.tables.lock();
        let seq = tables.next_id();
        let stored = OrderLineItem::restore(seq, order_id, line_item.menu_id(), line_item.quantity());
        tables.order_line_items.insert(seq, stored);
        Ok(stored)
    }

    async fn find_all_by_order_id(&self, order_id: i64) -> RepoResult<Vec<OrderLineItem>> {
        let tables = self.tables.lock();
        Ok(tables
            .order_line_items
            .values()
            .filter(|item| item.order_id() == order_id)
            .copied()
            .collect())
    }
}
