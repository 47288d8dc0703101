//! Shared library surface for the station server and its tests.

pub mod api;
pub mod config;
pub mod fleet;
pub mod ingest;
pub mod persistence;
pub mod state;
