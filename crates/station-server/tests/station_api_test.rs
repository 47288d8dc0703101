//! Live-server API tests.
//!
//! Run with: cargo test --test station_api_test -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("STATION_TEST_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Submit a waypoint and find it in the coordinate log.
#[tokio::test]
#[ignore]
async fn test_coordinate_submission() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/coordinates", base))
        .json(&json!({ "latitude": 55.751244, "longitude": 37.618423 }))
        .send()
        .await
        .expect("Failed to submit coordinate");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let plan_path = body["planFilePath"].as_str().expect("plan path");
    assert!(plan_path.ends_with(".plan"));

    let resp = client
        .get(format!("{}/coordinates", base))
        .send()
        .await
        .unwrap();
    let coordinates: Vec<Value> = resp.json().await.unwrap();
    let found = coordinates
        .iter()
        .any(|c| c["latitude"] == json!(55.751244) && c["longitude"] == json!(37.618423));
    assert!(found, "Submitted coordinate should appear in list");
}

/// Register a drone, change its status, and look it up.
#[tokio::test]
#[ignore]
async fn test_drone_lifecycle() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/drones", base))
        .json(&json!({ "status": "idle" }))
        .send()
        .await
        .expect("Failed to add drone");
    assert!(resp.status().is_success(), "Should add drone");
    let created: Value = resp.json().await.unwrap();
    let id = created["drone"]["id"].as_i64().unwrap();

    let resp = client
        .put(format!("{}/drones/{}", base, id))
        .json(&json!({ "status": "in_flight" }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success(), "Should update drone status");

    let resp = client.get(format!("{}/drones", base)).send().await.unwrap();
    let drones: Vec<Value> = resp.json().await.unwrap();
    let drone = drones
        .iter()
        .find(|d| d["id"].as_i64() == Some(id))
        .expect("Drone should appear in list");
    assert_eq!(drone["status"].as_str(), Some("in_flight"));

    let resp = client
        .put(format!("{}/drones/{}", base, i64::MAX))
        .json(&json!({ "status": "lost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
