//! REST API router.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{coordinates, drones};
use crate::state::AppState;

/// Coordinate and drone resources under the given collection names.
fn resources(coordinates_path: &str, drones_path: &str) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            coordinates_path,
            post(coordinates::post_coordinates).get(coordinates::list_coordinates),
        )
        .route(drones_path, post(drones::add_drone).get(drones::list_drones))
        .route(
            &format!("{}/:id", drones_path),
            get(drones::get_drone).put(drones::update_drone_status),
        )
}

/// Create the API router.
///
/// Resources are served at the root and again under `/api`. Handset clients
/// address `/api/Coordinates` and `/api/Drones`, so those spellings are
/// routed as well.
pub fn create_router() -> Router<Arc<AppState>> {
    let api = resources("/coordinates", "/drones").merge(resources("/Coordinates", "/Drones"));

    Router::new()
        .merge(resources("/coordinates", "/drones"))
        .nest("/api", api)
}
