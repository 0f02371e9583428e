//! 类型转换模块
//!
//! JSON request bodies → domain inputs (`New*`), and stored domain values →
//! JSON responses. Field names are camelCase on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{
    Menu, MenuGroup, MenuProduct, NewMenu, NewMenuGroup, NewMenuProduct, NewOrder,
    NewOrderLineItem, NewOrderTable, NewProduct, NewTableGroup, Order, OrderLineItem,
    OrderStatus, OrderTable, Product, TableGroup,
};

fn required<T>(value: Option<T>, message: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::invalid_argument(message))
}

// ============ Menu Group ============

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroupRequest {
    pub name: Option<String>,
}

impl MenuGroupRequest {
    pub fn into_domain(self) -> AppResult<NewMenuGroup> {
        NewMenuGroup::new(required(self.name, "Menu group name is required")?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroupResponse {
    pub id: i64,
    pub name: String,
}

impl From<MenuGroup> for MenuGroupResponse {
    fn from(g: MenuGroup) -> Self {
        Self {
            id: g.id(),
            name: g.name().to_string(),
        }
    }
}

// ============ Product ============

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductRequest {
    pub fn into_domain(self) -> AppResult<NewProduct> {
        NewProduct::new(
            required(self.name, "Product name is required")?,
            required(self.price, "Product price is required")?,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            price: p.price().amount(),
        }
    }
}

// ============ Menu ============

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProductRequest {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub menu_group_id: i64,
    #[serde(default)]
    pub menu_products: Vec<MenuProductRequest>,
}

impl MenuRequest {
    pub fn into_domain(self) -> AppResult<NewMenu> {
        let menu_products = self
            .menu_products
            .into_iter()
            .map(|mp| NewMenuProduct::new(mp.product_id, mp.quantity))
            .collect::<AppResult<Vec<_>>>()?;
        NewMenu::new(
            required(self.name, "Menu name is required")?,
            self.price,
            self.menu_group_id,
            menu_products,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProductResponse {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<&MenuProduct> for MenuProductResponse {
    fn from(mp: &MenuProduct) -> Self {
        Self {
            seq: mp.seq(),
            menu_id: mp.menu_id(),
            product_id: mp.product_id(),
            quantity: mp.quantity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProductResponse>,
}

impl From<Menu> for MenuResponse {
    fn from(m: Menu) -> Self {
        Self {
            id: m.id(),
            name: m.name().to_string(),
            price: m.price().amount(),
            menu_group_id: m.menu_group_id(),
            menu_products: m.menu_products().iter().map(MenuProductResponse::from).collect(),
        }
    }
}

// ============ Order Table ============

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableRequest {
    #[serde(default)]
    pub number_of_guests: i32,
    #[serde(default)]
    pub empty: bool,
}

impl OrderTableRequest {
    pub fn into_domain(self) -> AppResult<NewOrderTable> {
        NewOrderTable::new(self.number_of_guests, self.empty)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmptyRequest {
    pub empty: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNumberOfGuestsRequest {
    pub number_of_guests: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableResponse {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl From<&OrderTable> for OrderTableResponse {
    fn from(t: &OrderTable) -> Self {
        Self {
            id: t.id(),
            table_group_id: t.table_group_id(),
            number_of_guests: t.number_of_guests(),
            empty: t.is_empty(),
        }
    }
}

impl From<OrderTable> for OrderTableResponse {
    fn from(t: OrderTable) -> Self {
        Self::from(&t)
    }
}

// ============ Table Group ============

/// Member reference, `{ "id": 1 }`
#[derive(Debug, Clone, Deserialize)]
pub struct TableRef {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupRequest {
    #[serde(default)]
    pub order_tables: Vec<TableRef>,
}

impl TableGroupRequest {
    pub fn into_domain(self, created_date: i64) -> AppResult<NewTableGroup> {
        NewTableGroup::new(
            created_date,
            self.order_tables.into_iter().map(|t| t.id).collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupResponse {
    pub id: i64,
    /// Unix millis
    pub created_date: i64,
    pub order_tables: Vec<OrderTableResponse>,
}

impl From<TableGroup> for TableGroupResponse {
    fn from(g: TableGroup) -> Self {
        Self {
            id: g.id(),
            created_date: g.created_date(),
            order_tables: g.order_tables().iter().map(OrderTableResponse::from).collect(),
        }
    }
}

// ============ Order ============

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemRequest {
    pub menu_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_table_id: i64,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemRequest>,
}

impl OrderRequest {
    pub fn into_domain(self, ordered_time: i64) -> AppResult<NewOrder> {
        let items = self
            .order_line_items
            .into_iter()
            .map(|item| NewOrderLineItem::new(item.menu_id, item.quantity))
            .collect::<AppResult<Vec<_>>>()?;
        NewOrder::new(self.order_table_id, items, ordered_time)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOrderStatusRequest {
    pub order_status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemResponse {
    pub seq: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i64,
}

impl From<&OrderLineItem> for OrderLineItemResponse {
    fn from(item: &OrderLineItem) -> Self {
        Self {
            seq: item.seq(),
            order_id: item.order_id(),
            menu_id: item.menu_id(),
            quantity: item.quantity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    /// Unix millis
    pub ordered_time: i64,
    pub order_line_items: Vec<OrderLineItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id(),
            order_table_id: o.order_table_id(),
            order_status: o.order_status(),
            ordered_time: o.ordered_time(),
            order_line_items: o.line_items().iter().map(OrderLineItemResponse::from).collect(),
        }
    }
}
