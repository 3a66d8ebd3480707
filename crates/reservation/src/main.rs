use anyhow::{Context, Result};
use reservation::app::ReservationApp;
use shared::{
    config::Config,
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
    let telemetry = Telemetry::init("reservation-service", &otel_endpoint)
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.logger_provider(),
        "reservation-service",
        is_dev,
        enable_file,
    );

    let app = ReservationApp::new(config.reservation, &config.kafka_broker);

    tokio::select! {
        result = app.run() => {
            result.context("Reservation consumer failed")?;
        }
        _ = shutdown_signal() => {
            info!("🛑 Shutdown signal received.");
        }
    }

    info!("✅ Reservation service shutdown gracefully.");
    telemetry.shutdown()?;

    Ok(())
}
