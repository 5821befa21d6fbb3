//! WooCommerce API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::models::Product;

use crate::core::ServerState;
use crate::services::woocommerce::{CustomerInfo, WooOrder};
use crate::utils::{AppError, AppResult};

const UNCONFIGURED_MESSAGE: &str = "WooCommerce API not configured. Please provide \
     WOOCOMMERCE_URL, WOOCOMMERCE_CONSUMER_KEY and WOOCOMMERCE_CONSUMER_SECRET.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Selected product ids; unknown ids are skipped
    pub components: Vec<String>,
    pub customer_info: CustomerInfo,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order_id: i64,
    pub order_total: String,
    pub message: String,
    pub woocommerce_order: WooOrder,
}

/// POST /api/woocommerce/order - submit a build as a remote order
pub async fn create_order(
    State(state): State<ServerState>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<Json<OrderResponse>> {
    let client = state
        .woocommerce()
        .ok_or_else(|| AppError::unconfigured(UNCONFIGURED_MESSAGE))?;

    payload
        .customer_info
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // Resolve ids into full product records; unknown ids are skipped
    let products: Vec<Product> = payload
        .components
        .iter()
        .filter_map(|id| state.products.get(id))
        .collect();

    if products.is_empty() {
        return Err(AppError::validation("No valid products found"));
    }

    let order = client
        .create_build_order(&products, &payload.customer_info)
        .await
        .map_err(|e| AppError::external(e.to_string()))?;

    tracing::info!(order_id = order.id, total = %order.total, "WooCommerce order created");

    Ok(Json(OrderResponse {
        success: true,
        order_id: order.id,
        order_total: order.total.clone(),
        message: "PC build order created successfully".to_string(),
        woocommerce_order: order,
    }))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub woocommerce_configured: bool,
    /// Base URL only; credential values are never reported
    pub api_url: Option<String>,
    pub has_consumer_key: bool,
    pub has_consumer_secret: bool,
}

/// GET /api/woocommerce/status - configuration presence flags
pub async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    let config = state.config.woocommerce.as_ref();

    Json(StatusResponse {
        woocommerce_configured: state.woocommerce().is_some(),
        api_url: config.map(|c| c.base_url.clone()),
        has_consumer_key: config.is_some_and(|c| !c.consumer_key.is_empty()),
        has_consumer_secret: config.is_some_and(|c| !c.consumer_secret.is_empty()),
    })
}
