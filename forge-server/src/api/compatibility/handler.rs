//! Compatibility API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use shared::models::{CompatibilityReport, ComponentSelection};

use crate::compat;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(default)]
    pub components: ComponentSelection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub compatibility: CompatibilityReport,
    pub total_wattage: u32,
}

/// POST /api/compatibility - evaluate the selected components
pub async fn check(
    State(state): State<ServerState>,
    Json(payload): Json<CompatibilityRequest>,
) -> AppResult<Json<CompatibilityResponse>> {
    let assessment = compat::evaluate(&payload.components, &state.products);

    Ok(Json(CompatibilityResponse {
        compatibility: assessment.report,
        total_wattage: assessment.total_wattage,
    }))
}
