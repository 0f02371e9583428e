//! Menu Group API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::api::convert::{MenuGroupRequest, MenuGroupResponse};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/menu-groups - 获取所有菜单分组
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuGroupResponse>>> {
    let groups = state.menu_groups.list().await?;
    Ok(Json(groups.into_iter().map(MenuGroupResponse::from).collect()))
}

/// POST /api/menu-groups - 创建菜单分组
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuGroupRequest>,
) -> AppResult<(StatusCode, Json<MenuGroupResponse>)> {
    let group = state.menu_groups.create(payload.into_domain()?).await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}
