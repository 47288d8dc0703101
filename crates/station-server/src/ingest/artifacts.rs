//! Mission-plan artifact storage.
//!
//! Files are named after the local wall-clock second they were written in.
//! A second write within the same second gets a numeric suffix instead of
//! replacing the first file.

use chrono::{DateTime, Local};
use station_core::MissionPlan;
use std::io;
use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

pub const PLAN_EXTENSION: &str = "plan";

/// Upper bound on same-second suffixes before giving up.
const MAX_COLLISION_SUFFIX: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the mission directory if missing.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Write a plan and return its path once it is flushed to disk.
    pub async fn write(&self, plan: &MissionPlan, at: DateTime<Local>) -> io::Result<PathBuf> {
        let content = plan.to_json_pretty().map_err(io::Error::from)?;
        let stem = artifact_stem(at);

        for suffix in 0..=MAX_COLLISION_SUFFIX {
            let path = self.dir.join(artifact_name(&stem, suffix));
            let file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };

            if let Err(e) = write_durably(file, content.as_bytes()).await {
                if let Err(cleanup) = fs::remove_file(&path).await {
                    tracing::warn!("Failed to remove partial artifact {}: {}", path.display(), cleanup);
                }
                return Err(e);
            }
            return Ok(path);
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("too many artifacts named {}", stem),
        ))
    }
}

async fn write_durably(mut file: fs::File, content: &[u8]) -> io::Result<()> {
    file.write_all(content).await?;
    file.flush().await?;
    file.sync_all().await
}

/// `Mission_YYYYMMDD_HHMMSS`
pub fn artifact_stem(at: DateTime<Local>) -> String {
    format!("Mission_{}", at.format("%Y%m%d_%H%M%S"))
}

fn artifact_name(stem: &str, suffix: u32) -> String {
    if suffix == 0 {
        format!("{}.{}", stem, PLAN_EXTENSION)
    } else {
        format!("{}_{}.{}", stem, suffix, PLAN_EXTENSION)
    }
}
