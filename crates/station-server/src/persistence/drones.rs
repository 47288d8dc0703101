//! Drone persistence operations.

use anyhow::Result;
use sqlx::{Sqlite, SqlitePool};
use station_core::DroneRecord;

/// Insert a drone and return it with its storage-assigned id.
pub async fn insert_drone(pool: &SqlitePool, status: &str) -> Result<DroneRecord> {
    let row = sqlx::query_as::<_, DroneRow>(
        "INSERT INTO drones (status) VALUES (?1) RETURNING id, status",
    )
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Replace a drone's status inside an existing transaction.
///
/// Returns `None` when no drone has that id.
pub async fn update_status_tx(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    id: i64,
    status: &str,
) -> Result<Option<DroneRecord>> {
    let row = sqlx::query_as::<_, DroneRow>(
        r#"
        UPDATE drones SET status = ?2, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?1
        RETURNING id, status
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.map(Into::into))
}

/// Load a single drone by id.
#[cfg(test)]
pub async fn load_drone(pool: &SqlitePool, id: i64) -> Result<Option<DroneRecord>> {
    let row = sqlx::query_as::<_, DroneRow>("SELECT id, status FROM drones WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Into::into))
}

/// Load all drones from the database.
pub async fn load_all_drones(pool: &SqlitePool) -> Result<Vec<DroneRecord>> {
    let rows = sqlx::query_as::<_, DroneRow>("SELECT id, status FROM drones ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct DroneRow {
    id: i64,
    status: String,
}

impl From<DroneRow> for DroneRecord {
    fn from(row: DroneRow) -> Self {
        DroneRecord {
            id: row.id,
            status: row.status,
        }
    }
}
