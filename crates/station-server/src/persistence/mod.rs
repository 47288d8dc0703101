//! Persistence layer for the station server.
//!
//! SQLite-backed storage for the drone fleet. The fleet registry keeps a
//! write-through DashMap cache on top of these queries.

pub mod db;
pub mod drones;

pub use db::{init_database, Database};
