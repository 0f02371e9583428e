//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu_groups`] - 菜单分组
//! - [`products`] - 商品
//! - [`menus`] - 菜单
//! - [`tables`] - 桌台
//! - [`table_groups`] - 拼桌
//! - [`orders`] - 订单
//!
//! Handlers only map between the JSON bodies in [`convert`] and the domain
//! types; every rule lives in `services` and `shared::models`.

pub mod convert;

pub mod health;

// Data models API
pub mod menu_groups;
pub mod menus;
pub mod orders;
pub mod products;
pub mod table_groups;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
