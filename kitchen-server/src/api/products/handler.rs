//! Product API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::api::convert::{ProductRequest, ProductResponse};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.products.list().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.products.create(payload.into_domain()?).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}
