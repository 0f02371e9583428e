//! Menu API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::api::convert::{MenuRequest, MenuResponse};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/menus - 获取所有菜单 (含商品明细)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuResponse>>> {
    let menus = state.menus.list().await?;
    Ok(Json(menus.into_iter().map(MenuResponse::from).collect()))
}

/// POST /api/menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuRequest>,
) -> AppResult<(StatusCode, Json<MenuResponse>)> {
    let menu = state.menus.create(payload.into_domain()?).await?;
    Ok((StatusCode::CREATED, Json(menu.into())))
}
