//! SDK client tests against an in-process server on an ephemeral port.

use axum::{routing::get, Router};
use reqwest::StatusCode;
use std::sync::Arc;
use tempfile::TempDir;

use station_core::Coordinate;
use station_sdk::{ClientError, StationClient};
use station_server::{api, config::Config, persistence, state::AppState};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}", addr)
}

async fn spawn_station() -> (StationClient, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = Config::from_env();
    config.mission_dir = dir.path().join("missions");
    config.database_path = dir.path().join("station.db").to_string_lossy().to_string();

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await
        .expect("init db");
    let state = Arc::new(AppState::with_database(db, config).await.expect("state"));

    let url = serve(api::app(state)).await;
    (StationClient::new(url).expect("client"), dir)
}

#[tokio::test]
async fn submit_and_list_round_trip() {
    let (client, _dir) = spawn_station().await;

    let receipt = client
        .submit_coordinate(Coordinate::new(55.751244, 37.618423))
        .await
        .unwrap();
    assert_eq!(receipt.data, Coordinate::new(55.751244, 37.618423));
    assert!(receipt.plan_file_path.ends_with(".plan"));

    let coordinates = client.list_coordinates().await.unwrap();
    assert_eq!(coordinates, vec![Coordinate::new(55.751244, 37.618423)]);
}

#[tokio::test]
async fn unknown_drone_surfaces_server_message() {
    let (client, _dir) = spawn_station().await;

    let err = client.update_drone_status(999, "lost").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Drone not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(client.list_drones().await.unwrap().is_empty());
}

#[tokio::test]
async fn validation_failure_carries_message() {
    let (client, _dir) = spawn_station().await;

    let err = client
        .submit_coordinate(Coordinate::new(123.456, 10.0))
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(message.contains("latitude"), "message was {}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn plain_text_error_falls_back_to_reason() {
    let (client, _dir) = spawn_station().await;

    // NaN serializes as null, which the server's JSON extractor rejects
    // with a plain-text body.
    let err = client
        .submit_coordinate(Coordinate::new(f64::NAN, 10.0))
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(message, "Unprocessable Entity");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let app = Router::new().route("/drones", get(|| async { "not json" }));
    let client = StationClient::new(serve(app).await).unwrap();

    let err = client.list_drones().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn drone_lifecycle_through_client() {
    let (client, _dir) = spawn_station().await;

    let added = client.add_drone("idle").await.unwrap();
    assert_eq!(added.message, "Drone added successfully");

    let updated = client
        .update_drone_status(added.drone.id, "in_flight")
        .await
        .unwrap();
    assert_eq!(updated.drone.status, "in_flight");

    let drones = client.list_drones().await.unwrap();
    assert_eq!(drones, vec![updated.drone]);
}
