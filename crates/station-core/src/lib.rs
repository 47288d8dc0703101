pub mod models;
pub mod plan;

pub use models::{Coordinate, CoordinateError, DroneRecord, DroneStatusRequest};
pub use plan::{encode, encode_route, MissionItem, MissionPlan, PlanError};
