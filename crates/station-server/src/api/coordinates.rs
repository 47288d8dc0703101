//! Coordinate ingestion endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::ingest::IngestError;
use crate::state::AppState;
use station_core::Coordinate;

/// Accept a waypoint and write its mission plan.
/// POST /coordinates
pub async fn post_coordinates(
    State(state): State<Arc<AppState>>,
    Json(coordinate): Json<Coordinate>,
) -> (StatusCode, Json<Value>) {
    match state.ingestion().ingest(coordinate).await {
        Ok(ingested) => (
            StatusCode::OK,
            Json(json!({
                "message": "Coordinates received and saved successfully",
                "data": ingested.coordinate,
                "planFilePath": ingested.artifact_path.to_string_lossy(),
            })),
        ),
        Err(IngestError::Validation(err)) => {
            tracing::warn!("Rejected coordinate: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": err.to_string(),
                    "field": err.field(),
                })),
            )
        }
        Err(err @ IngestError::PersistenceFailed(_)) => {
            tracing::error!(
                "Error generating/saving .plan file for ({}, {}): {}",
                coordinate.latitude,
                coordinate.longitude,
                err
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Error saving the .plan file" })),
            )
        }
    }
}

/// Every coordinate received so far, oldest first.
/// GET /coordinates
pub async fn list_coordinates(State(state): State<Arc<AppState>>) -> Json<Vec<Coordinate>> {
    Json(state.ingestion().list_all())
}
