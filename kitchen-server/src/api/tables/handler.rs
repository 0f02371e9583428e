//! Order Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::convert::{
    ChangeEmptyRequest, ChangeNumberOfGuestsRequest, OrderTableRequest, OrderTableResponse,
};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderTableResponse>>> {
    let tables = state.tables.list().await?;
    Ok(Json(tables.into_iter().map(OrderTableResponse::from).collect()))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderTableRequest>,
) -> AppResult<(StatusCode, Json<OrderTableResponse>)> {
    let table = state.tables.create(payload.into_domain()?).await?;
    Ok((StatusCode::CREATED, Json(table.into())))
}

/// PUT /api/tables/:id/empty - 设置空桌
pub async fn change_empty(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeEmptyRequest>,
) -> AppResult<Json<OrderTableResponse>> {
    let table = state.tables.change_empty(id, payload.empty).await?;
    Ok(Json(table.into()))
}

/// PUT /api/tables/:id/number-of-guests - 修改就餐人数
pub async fn change_number_of_guests(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeNumberOfGuestsRequest>,
) -> AppResult<Json<OrderTableResponse>> {
    let table = state
        .tables
        .change_number_of_guests(id, payload.number_of_guests)
        .await?;
    Ok(Json(table.into()))
}
