//! Core data models for the drone station.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A ground position submitted by a ground-station client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "Latitude")]
    pub latitude: f64,
    #[serde(alias = "Longitude")]
    pub longitude: f64,
}

/// Rejection reasons for a submitted coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CoordinateError {
    /// Name of the offending JSON field.
    pub fn field(&self) -> &'static str {
        match *self {
            CoordinateError::NonFinite { field } | CoordinateError::OutOfRange { field, .. } => {
                field
            }
        }
    }
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both axes are finite and inside WGS84 bounds.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        check_axis("latitude", self.latitude, 90.0)?;
        check_axis("longitude", self.longitude, 180.0)
    }
}

fn check_axis(field: &'static str, value: f64, limit: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite { field });
    }
    if !(-limit..=limit).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            field,
            value,
            min: -limit,
            max: limit,
        });
    }
    Ok(())
}

/// A fleet member and its last reported operational status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneRecord {
    pub id: i64,
    pub status: String,
}

/// Body of `POST /drones` and `PUT /drones/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneStatusRequest {
    #[serde(alias = "Status")]
    pub status: String,
}
