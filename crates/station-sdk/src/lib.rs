//! Station SDK - ground-station client library
//!
//! Typed access to the coordinate and drone endpoints of the station server.

pub mod client;
pub mod error;

pub use client::{CoordinateReceipt, DroneReceipt, StationClient};
pub use error::ClientError;
pub use station_core::{Coordinate, DroneRecord};
