//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::util::now_millis;

use crate::api::convert::{ChangeOrderStatusRequest, OrderRequest, OrderResponse};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/orders - 获取所有订单 (含明细)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = state.orders.list().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let order = state.orders.create(payload.into_domain(now_millis())?).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

/// PUT /api/orders/:id/order-status - 修改订单状态
pub async fn change_order_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeOrderStatusRequest>,
) -> AppResult<Json<OrderResponse>> {
    let order = state
        .orders
        .change_order_status(id, payload.order_status)
        .await?;
    Ok(Json(order.into()))
}
