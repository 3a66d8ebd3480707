use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use delivery::{handler, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::{Telemetry, init_logger, shutdown_signal},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let otel_endpoint = std::env::var("OTEL_ENDPOINT")
        .unwrap_or_else(|_| "http://otel-collector:4317".to_string());
    let telemetry = Telemetry::init("delivery-service", &otel_endpoint)
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.logger_provider(),
        "delivery-service",
        is_dev,
        enable_file,
    );

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    let state = Arc::new(AppState::new(pool));

    state
        .store
        .ensure_provisioned()
        .await
        .context("Failed to provision document store")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.delivery.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Delivery service listening on {addr}");

    axum::serve(listener, handler::routes(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("✅ Delivery service shutdown gracefully.");
    telemetry.shutdown()?;

    Ok(())
}
