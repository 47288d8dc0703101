//! Database connection and initialization.

use anyhow::{Context, Result};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Database connection wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Initialize the SQLite database.
///
/// Creates the database file if it doesn't exist, runs migrations,
/// and returns a connection pool.
pub async fn init_database(db_path: &str, max_connections: u32) -> Result<Database> {
    // Each ":memory:" connection is its own database, so keep a single one.
    let max_connections = if db_path == ":memory:" { 1 } else { max_connections };

    if let Some(parent) = Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path);

    info!("Connecting to database: {}", db_path);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(&db_url)
        .await?;

    run_migrations(&pool).await?;

    Ok(Database { pool })
}

/// Run database migrations.
///
/// Every statement in the migration is idempotent (`IF NOT EXISTS`), so the
/// whole script runs on each start and any failure aborts startup.
async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let migration_sql = include_str!("../../migrations/001_init.sql");

    info!("Running database migrations...");

    for statement in migration_statements(migration_sql) {
        sqlx::query(&statement)
            .execute(pool)
            .await
            .with_context(|| format!("migration statement failed: {}", statement))?;
    }

    info!("Database migrations complete");
    Ok(())
}

/// Split a script on `;`, dropping `--` comment lines and empty statements.
fn migration_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|statement| {
            statement
                .lines()
                .filter(|line| !line.trim().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|statement| !statement.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_database() {
        let db = init_database(":memory:", 4).await.unwrap();

        let result: (i32,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='drones'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        assert_eq!(result.0, 1);
    }

    #[test]
    fn migration_script_splits_into_statements() {
        let statements = migration_statements(include_str!("../../migrations/001_init.sql"));
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS drones"));
        assert!(statements.iter().all(|s| !s.contains("--")));
    }

    #[tokio::test]
    async fn migrations_are_rerunnable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("station.db");
        let path = path.to_string_lossy().to_string();

        init_database(&path, 1).await.unwrap();
        let db = init_database(&path, 1).await.unwrap();
        run_migrations(db.pool()).await.unwrap();
    }
}
