//! 业务服务层
//!
//! One service per aggregate. A service loads entities through the repository
//! traits, applies the domain rules from `shared::models`, and persists the
//! resulting values.
//!
//! - [`ProductService`] - 商品
//! - [`MenuGroupService`] - 菜单分组
//! - [`MenuService`] - 菜单 (价格不得超过商品总价)
//! - [`TableService`] - 桌台 (空桌、人数)
//! - [`TableGroupService`] - 拼桌 / 解散拼桌
//! - [`OrderService`] - 订单创建与状态流转

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod product;
pub mod table;
pub mod table_group;

#[cfg(test)]
pub(crate) mod fake;

pub use menu::MenuService;
pub use menu_group::MenuGroupService;
pub use order::OrderService;
pub use product::ProductService;
pub use table::TableService;
pub use table_group::TableGroupService;

use shared::error::AppError;

/// `inspect_err` hook logging a rejected use case
fn rejected(use_case: &'static str) -> impl Fn(&AppError) {
    move |err| {
        tracing::warn!(use_case, code = %err.code, message = %err.message, "Request rejected");
    }
}
