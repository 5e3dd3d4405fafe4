use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::AppResult,
    models::{CreateProduct, Product},
    response::ApiResponse,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Product>>> {
    let products = state.products.get_products().await?;

    info!(count = products.len(), "Listed products");

    Ok(ApiResponse::success("Products fetched successfully", products))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> AppResult<ApiResponse<Product>> {
    let product = state.products.save_product(payload).await?;

    info!(id = product.product_id, name = ?product.product_name, "Created product");

    Ok(ApiResponse::success("Product added successfully", product))
}
