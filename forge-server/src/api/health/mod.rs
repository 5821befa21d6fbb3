//! Health check route
//!
//! | Path | Method | Meaning |
//! |---------|--------|------------------------|
//! | /health | GET | simple health check |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    version: &'static str,
    /// Seeded catalog size
    products: usize,
    /// Saved build count
    builds: usize,
    woocommerce_configured: bool,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        products: state.products.len(),
        builds: state.builds.len(),
        woocommerce_configured: state.woocommerce().is_some(),
    })
}
