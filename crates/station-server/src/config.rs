//! Server configuration from environment.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Directory receiving generated `.plan` files.
    pub mission_dir: PathBuf,
    pub database_path: String,
    pub database_max_connections: u32,
    /// Maximum retained coordinates; 0 keeps everything.
    pub coordinate_log_capacity: usize,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("STATION_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            mission_dir: env::var("STATION_MISSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("missions")),
            database_path: env::var("STATION_DATABASE_PATH")
                .unwrap_or_else(|_| "data/station.db".to_string()),
            database_max_connections: env::var("STATION_DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            coordinate_log_capacity: env::var("STATION_COORDINATE_LOG_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
            log_format: match env::var("STATION_LOG_FORMAT") {
                Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }
}
