//! Application state handed to every request handler.

use anyhow::Result;

use crate::config::Config;
use crate::fleet::FleetRegistry;
use crate::ingest::{ArtifactStore, CoordinateLog, IngestionService};
use crate::persistence::Database;

pub struct AppState {
    ingestion: IngestionService,
    fleet: FleetRegistry,
}

impl AppState {
    /// Wire services from configuration and an initialized database.
    pub async fn with_database(db: Database, config: Config) -> Result<Self> {
        let artifacts = ArtifactStore::new(config.mission_dir.clone());
        artifacts.ensure_dir().await?;
        let ingestion = IngestionService::new(
            CoordinateLog::new(config.coordinate_log_capacity),
            artifacts,
        );
        let fleet = FleetRegistry::load(db).await?;

        Ok(Self {
            ingestion,
            fleet,
        })
    }

    pub fn ingestion(&self) -> &IngestionService {
        &self.ingestion
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }
}
