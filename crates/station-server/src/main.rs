//! Station server - waypoint ingestion and drone fleet registry.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use station_server::api;
use station_server::config::{Config, LogFormat};
use station_server::persistence;
use station_server::state::AppState;

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("station_server=debug".parse()?);
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format)?;

    tracing::info!("Starting station server...");
    tracing::info!("Mission plans will be written to {}", config.mission_dir.display());

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await?;
    let port = config.server_port;
    let state = Arc::new(AppState::with_database(db, config).await?);

    let app = api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
