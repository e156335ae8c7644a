use tracing::info;

use pointsboard::{config::Config, error::AppError, scheduler::retention, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = startup::open_stores(&config).await?;

    info!("Starting pointsboard");

    // Start the retention sweep scheduler
    retention::start_scheduler(state, &config).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    info!("Shutting down");

    Ok(())
}
