//! WooCommerce API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/woocommerce", woocommerce_routes())
}

fn woocommerce_routes() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create_order))
        .route("/status", get(handler::status))
}
