//! Table Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::util::now_millis;

use crate::api::convert::{TableGroupRequest, TableGroupResponse};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/table-groups - 拼桌
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableGroupRequest>,
) -> AppResult<(StatusCode, Json<TableGroupResponse>)> {
    let group = state
        .table_groups
        .create(payload.into_domain(now_millis())?)
        .await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

/// DELETE /api/table-groups/:id - 解散拼桌
pub async fn ungroup(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.table_groups.ungroup(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
