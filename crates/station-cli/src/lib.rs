//! Station CLI - operator tools for the drone station.
//!
//! Server subcommands and the offline route planner used by the `station`
//! binary.

pub mod commands;
pub mod waypoints;

pub use commands::{run, ServerCommand};
pub use waypoints::{parse_waypoint, write_route_plan};
