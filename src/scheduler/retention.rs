use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::config::Config;
use crate::error::AppError;
use crate::service::points::PointsService;
use crate::state::AppState;

/// Starts the retention sweep scheduler
///
/// The sweep runs on the configured cron schedule and permanently deletes
/// ledger entries for members who left more than the retention window ago.
/// Sweep failures are logged and the schedule keeps running; they are never
/// fatal to the process. The sweep goes through the same per-document lock
/// as command-driven mutations.
///
/// # Arguments
/// - `state`: Application state holding the document stores
/// - `config`: Application configuration with schedule and retention window
pub async fn start_scheduler(state: AppState, config: &Config) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_state = state.clone();
    let retention_days = config.retention_days;

    let job = Job::new_async(config.sweep_schedule.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = run_sweep(&state, retention_days).await {
                error!("Error running retention sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Retention sweep scheduler started");

    Ok(())
}

/// Runs one retention sweep over the points ledger
async fn run_sweep(state: &AppState, retention_days: i64) -> Result<(), AppError> {
    let service = PointsService::new(&state.points);
    service.run_retention_sweep(Utc::now(), retention_days).await?;
    Ok(())
}
