//! Fleet registry endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::fleet::RegistryError;
use crate::state::AppState;
use station_core::{DroneRecord, DroneStatusRequest};

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Drone not found" })),
    )
}

fn storage_failure() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Drone registry is unavailable" })),
    )
}

/// POST /drones
pub async fn add_drone(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DroneStatusRequest>,
) -> (StatusCode, Json<Value>) {
    match state.fleet().add_drone(&req.status).await {
        Ok(drone) => (
            StatusCode::OK,
            Json(json!({
                "message": "Drone added successfully",
                "drone": drone,
            })),
        ),
        Err(err) => {
            tracing::error!("Failed to persist new drone: {}", err);
            storage_failure()
        }
    }
}

/// GET /drones
pub async fn list_drones(State(state): State<Arc<AppState>>) -> Json<Vec<DroneRecord>> {
    Json(state.fleet().list_drones())
}

/// GET /drones/:id
pub async fn get_drone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DroneRecord>, (StatusCode, Json<Value>)> {
    state.fleet().get_drone(id).map(Json).ok_or_else(not_found)
}

/// PUT /drones/:id
pub async fn update_drone_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<DroneStatusRequest>,
) -> (StatusCode, Json<Value>) {
    match state.fleet().update_status(id, &req.status).await {
        Ok(drone) => (
            StatusCode::OK,
            Json(json!({
                "message": "Drone status updated successfully",
                "drone": drone,
            })),
        ),
        Err(RegistryError::NotFound(_)) => not_found(),
        Err(RegistryError::Storage(err)) => {
            tracing::error!("Failed to update drone {}: {}", id, err);
            storage_failure()
        }
    }
}
