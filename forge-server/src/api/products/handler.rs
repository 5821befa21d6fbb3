//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Category, Product};

use crate::core::ServerState;
use crate::store::ProductFilter;
use crate::utils::{AppError, AppResult};

/// Listing query parameters
///
/// `brand` and `socket` accept comma-separated multi-values. Price
/// bounds are inclusive.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub socket: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

fn split_csv(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// GET /api/products - filtered catalog listing
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        brand: query.brand.map(split_csv),
        socket: query.socket.map(split_csv),
        min_price: query.min_price,
        max_price: query.max_price,
        search: query.search,
    };

    Ok(Json(state.products.list(query.category, &filter)))
}

/// GET /api/products/{id} - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    state
        .products
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))
}
