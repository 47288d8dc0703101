//! API routes for the station server.

pub mod coordinates;
pub mod drones;
pub mod request_id;
mod routes;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    routes::create_router()
}

/// Full application: resources, health check, request ids, tracing and CORS.
pub fn app(state: Arc<AppState>) -> Router {
    routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::ensure_request_id))
        .layer(CorsLayer::permissive())
}
