//! Build API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{Build, BuildCreate, BuildUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }
    Ok(())
}

fn validate_total_price(total_price: i64) -> AppResult<()> {
    if total_price < 0 {
        return Err(AppError::validation("totalPrice must not be negative"));
    }
    Ok(())
}

/// POST /api/builds - save a build configuration
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BuildCreate>,
) -> AppResult<Json<Build>> {
    validate_name(&payload.name)?;
    validate_total_price(payload.total_price)?;

    let build = state.builds.create(payload);
    tracing::info!(id = %build.id, name = %build.name, "Build created");
    Ok(Json(build))
}

/// GET /api/builds/{id} - single build
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Build>> {
    state
        .builds
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Build {}", id)))
}

/// PATCH /api/builds/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BuildUpdate>,
) -> AppResult<Json<Build>> {
    if let Some(name) = &payload.name {
        validate_name(name)?;
    }
    if let Some(total_price) = payload.total_price {
        validate_total_price(total_price)?;
    }

    state
        .builds
        .update(&id, payload)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Build {}", id)))
}
