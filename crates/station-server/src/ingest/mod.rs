//! Coordinate ingestion: validate, log, encode, persist.

pub mod artifacts;
pub mod history;

use chrono::Local;
use station_core::{encode, Coordinate, CoordinateError, MissionPlan};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use artifacts::ArtifactStore;
pub use history::CoordinateLog;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid coordinate: {0}")]
    Validation(#[from] CoordinateError),
    #[error("failed to persist mission plan: {0}")]
    PersistenceFailed(#[source] io::Error),
}

/// Outcome of a successful ingestion.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub coordinate: Coordinate,
    pub document: MissionPlan,
    pub artifact_path: PathBuf,
}

pub struct IngestionService {
    log: CoordinateLog,
    artifacts: ArtifactStore,
}

impl IngestionService {
    pub fn new(log: CoordinateLog, artifacts: ArtifactStore) -> Self {
        Self { log, artifacts }
    }

    /// Accept a coordinate and write its mission plan.
    ///
    /// A coordinate that passes validation stays in the log even when the
    /// plan file cannot be written.
    pub async fn ingest(&self, coordinate: Coordinate) -> Result<Ingested, IngestError> {
        coordinate.validate()?;
        self.log.append(coordinate);

        let document = encode(&coordinate);
        let artifact_path = self
            .artifacts
            .write(&document, Local::now())
            .await
            .map_err(IngestError::PersistenceFailed)?;

        tracing::info!(
            "Saved mission plan for ({}, {}) to {}",
            coordinate.latitude,
            coordinate.longitude,
            artifact_path.display()
        );

        Ok(Ingested {
            coordinate,
            document,
            artifact_path,
        })
    }

    /// Every logged coordinate, oldest first.
    pub fn list_all(&self) -> Vec<Coordinate> {
        self.log.snapshot()
    }
}
