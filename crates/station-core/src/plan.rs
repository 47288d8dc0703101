//! QGroundControl mission-plan encoding.
//!
//! A plan file has four sections (geofence, mission, rally points) under a
//! versioned envelope. Only the mission section carries data here; geofence
//! and rally sections are emitted empty so ground-control software accepts
//! the file unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::Coordinate;

pub const FILE_TYPE: &str = "Plan";
pub const GROUND_STATION: &str = "QGroundControl";
pub const PLAN_VERSION: u32 = 1;
pub const SECTION_VERSION: u32 = 2;

/// MAV_CMD_NAV_WAYPOINT
pub const WAYPOINT_COMMAND: u16 = 22;
/// MAV_FRAME_GLOBAL_RELATIVE_ALT
pub const RELATIVE_ALTITUDE_FRAME: u8 = 3;
/// MAV_AUTOPILOT_ARDUPILOTMEGA
pub const FIRMWARE_TYPE: u8 = 3;
/// MAV_TYPE_QUADROTOR
pub const VEHICLE_TYPE: u8 = 2;

pub const DEFAULT_ALTITUDE_M: f64 = 50.0;
pub const CRUISE_SPEED_MPS: f64 = 5.0;
pub const HOVER_SPEED_MPS: f64 = 3.0;

const SIMPLE_ITEM: &str = "SimpleItem";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("a mission needs at least one waypoint")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPlan {
    pub file_type: String,
    pub ground_station: String,
    pub geo_fence: GeoFence,
    pub mission: Mission,
    pub rally_points: RallyPoints,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFence {
    pub circles: Vec<Value>,
    pub polygons: Vec<Value>,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub cruise_speed: f64,
    pub hover_speed: f64,
    pub firmware_type: u8,
    pub items: Vec<MissionItem>,
    /// `[latitude, longitude, altitude_m]`
    pub planned_home_position: [f64; 3],
    pub vehicle_type: u8,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionItem {
    pub auto_continue: bool,
    pub command: u16,
    pub frame: u8,
    pub param1: f64,
    pub param2: f64,
    pub param3: f64,
    pub param4: f64,
    #[serde(rename = "type")]
    pub item_type: String,
    /// `[latitude, longitude, altitude_m]`
    pub coordinate: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RallyPoints {
    pub points: Vec<Value>,
    pub version: u32,
}

impl MissionItem {
    /// Fly-to command for a single coordinate at the default altitude.
    pub fn waypoint(coordinate: &Coordinate) -> Self {
        Self {
            auto_continue: true,
            command: WAYPOINT_COMMAND,
            frame: RELATIVE_ALTITUDE_FRAME,
            param1: 0.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
            item_type: SIMPLE_ITEM.to_string(),
            coordinate: position(coordinate),
        }
    }
}

impl MissionPlan {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Encode a single-waypoint mission. Home is the waypoint itself.
pub fn encode(coordinate: &Coordinate) -> MissionPlan {
    build(coordinate, vec![MissionItem::waypoint(coordinate)])
}

/// Encode an ordered route, one waypoint item per coordinate.
///
/// The planned home position is the first waypoint.
pub fn encode_route(waypoints: &[Coordinate]) -> Result<MissionPlan, PlanError> {
    let home = waypoints.first().ok_or(PlanError::Empty)?;
    let items = waypoints.iter().map(MissionItem::waypoint).collect();
    Ok(build(home, items))
}

fn build(home: &Coordinate, items: Vec<MissionItem>) -> MissionPlan {
    MissionPlan {
        file_type: FILE_TYPE.to_string(),
        ground_station: GROUND_STATION.to_string(),
        geo_fence: GeoFence {
            circles: Vec::new(),
            polygons: Vec::new(),
            version: SECTION_VERSION,
        },
        mission: Mission {
            cruise_speed: CRUISE_SPEED_MPS,
            hover_speed: HOVER_SPEED_MPS,
            firmware_type: FIRMWARE_TYPE,
            items,
            planned_home_position: position(home),
            vehicle_type: VEHICLE_TYPE,
            version: SECTION_VERSION,
        },
        rally_points: RallyPoints {
            points: Vec::new(),
            version: SECTION_VERSION,
        },
        version: PLAN_VERSION,
    }
}

fn position(coordinate: &Coordinate) -> [f64; 3] {
    [coordinate.latitude, coordinate.longitude, DEFAULT_ALTITUDE_M]
}
