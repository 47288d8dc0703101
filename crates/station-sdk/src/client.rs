//! Station API client.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ClientError;
use station_core::{Coordinate, DroneRecord, DroneStatusRequest};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the station server.
pub struct StationClient {
    base_url: String,
    client: reqwest::Client,
}

/// Response to a coordinate submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateReceipt {
    pub message: String,
    pub data: Coordinate,
    pub plan_file_path: String,
}

/// Response to adding a drone or changing its status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneReceipt {
    pub message: String,
    pub drone: DroneRecord,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl StationClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a waypoint; the server answers with the saved plan path.
    pub async fn submit_coordinate(&self, coordinate: Coordinate) -> Result<CoordinateReceipt, ClientError> {
        let response = self
            .client
            .post(self.url("/coordinates"))
            .json(&coordinate)
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode(response).await
    }

    pub async fn list_coordinates(&self) -> Result<Vec<Coordinate>, ClientError> {
        let response = self
            .client
            .get(self.url("/coordinates"))
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode(response).await
    }

    pub async fn add_drone(&self, status: &str) -> Result<DroneReceipt, ClientError> {
        let response = self
            .client
            .post(self.url("/drones"))
            .json(&DroneStatusRequest {
                status: status.to_string(),
            })
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode(response).await
    }

    pub async fn list_drones(&self) -> Result<Vec<DroneRecord>, ClientError> {
        let response = self
            .client
            .get(self.url("/drones"))
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode(response).await
    }

    pub async fn update_drone_status(&self, id: i64, status: &str) -> Result<DroneReceipt, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/drones/{}", id)))
            .json(&DroneStatusRequest {
                status: status.to_string(),
            })
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(ClientError::from_transport);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    tracing::debug!("Station server returned {}: {}", status, message);
    Err(ClientError::Status { status, message })
}
