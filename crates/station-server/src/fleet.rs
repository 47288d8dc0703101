//! Drone fleet registry.
//!
//! SQLite is the source of truth; a DashMap mirrors it for reads. Writes go
//! through a single async mutex so the cache never reorders updates the
//! database has already committed.

use anyhow::Result;
use dashmap::DashMap;
use station_core::DroneRecord;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::persistence::{drones, Database};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("drone {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct FleetRegistry {
    db: Database,
    cache: DashMap<i64, DroneRecord>,
    write_lock: Mutex<()>,
}

impl FleetRegistry {
    /// Build a registry and warm the cache from storage.
    pub async fn load(db: Database) -> Result<Self> {
        let cache = DashMap::new();
        for drone in drones::load_all_drones(db.pool()).await? {
            cache.insert(drone.id, drone);
        }
        tracing::info!("Loaded {} drones from database", cache.len());

        Ok(Self {
            db,
            cache,
            write_lock: Mutex::new(()),
        })
    }

    pub async fn add_drone(&self, status: &str) -> Result<DroneRecord> {
        let _guard = self.write_lock.lock().await;
        let drone = drones::insert_drone(self.db.pool(), status).await?;
        self.cache.insert(drone.id, drone.clone());
        tracing::info!("Added drone {} with status '{}'", drone.id, drone.status);
        Ok(drone)
    }

    /// All drones ordered by id.
    pub fn list_drones(&self) -> Vec<DroneRecord> {
        let mut all: Vec<DroneRecord> = self.cache.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|d| d.id);
        all
    }

    pub fn get_drone(&self, id: i64) -> Option<DroneRecord> {
        self.cache.get(&id).map(|r| r.value().clone())
    }

    pub async fn update_status(&self, id: i64, status: &str) -> Result<DroneRecord, RegistryError> {
        let _guard = self.write_lock.lock().await;

        let mut tx = self.db.pool().begin().await.map_err(anyhow::Error::from)?;
        let updated = drones::update_status_tx(&mut tx, id, status).await?;
        let Some(drone) = updated else {
            return Err(RegistryError::NotFound(id));
        };
        tx.commit().await.map_err(anyhow::Error::from)?;

        self.cache.insert(drone.id, drone.clone());
        tracing::info!("Drone {} status set to '{}'", drone.id, drone.status);
        Ok(drone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::init_database;
    use std::sync::Arc;

    async fn registry() -> FleetRegistry {
        let db = init_database(":memory:", 1).await.unwrap();
        FleetRegistry::load(db).await.unwrap()
    }

    #[tokio::test]
    async fn add_then_list() {
        let fleet = registry().await;
        let a = fleet.add_drone("idle").await.unwrap();
        let b = fleet.add_drone("in_flight").await.unwrap();

        assert_eq!(fleet.list_drones(), vec![a, b]);
    }

    #[tokio::test]
    async fn update_is_visible_to_next_read() {
        let fleet = registry().await;
        let drone = fleet.add_drone("idle").await.unwrap();

        let updated = fleet.update_status(drone.id, "charging").await.unwrap();

        assert_eq!(updated.status, "charging");
        assert_eq!(fleet.get_drone(drone.id).unwrap().status, "charging");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_changes_nothing() {
        let fleet = registry().await;
        let drone = fleet.add_drone("idle").await.unwrap();

        let err = fleet.update_status(999, "lost").await.unwrap_err();

        assert!(matches!(err, RegistryError::NotFound(999)));
        assert_eq!(fleet.list_drones(), vec![drone]);
    }

    #[tokio::test]
    async fn reload_restores_cache_from_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.db").to_string_lossy().to_string();

        let fleet = FleetRegistry::load(init_database(&path, 2).await.unwrap())
            .await
            .unwrap();
        let drone = fleet.add_drone("idle").await.unwrap();
        fleet.update_status(drone.id, "maintenance").await.unwrap();
        drop(fleet);

        let reloaded = FleetRegistry::load(init_database(&path, 2).await.unwrap())
            .await
            .unwrap();
        assert_eq!(reloaded.get_drone(drone.id).unwrap().status, "maintenance");
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let fleet = Arc::new(registry().await);
        let drone = fleet.add_drone("idle").await.unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let fleet = fleet.clone();
            handles.push(tokio::spawn(async move {
                fleet.update_status(drone.id, &format!("status-{}", i)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let cached = fleet.get_drone(drone.id).unwrap();
        let stored = drones::load_drone(fleet.db.pool(), drone.id).await.unwrap().unwrap();
        assert_eq!(cached, stored);
    }
}
