//! Rotation poller job.
//!
//! Periodically checks whether the pool team's opponent (or game date,
//! in playoff mode) has changed and rotates the draft order when it
//! has. Errors are logged and the job keeps running; a failed poll just
//! means the next tick tries again.

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{
    error::AppError, nhl::NhlClient, notify::Notifier, service::rotation::RotationService,
};

/// Starts the rotation poller on the given cron schedule.
pub async fn start_scheduler(
    db: DatabaseConnection,
    nhl: NhlClient,
    notifier: Arc<dyn Notifier>,
    state_path: PathBuf,
    schedule: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_nhl = nhl.clone();
    let job_notifier = notifier.clone();
    let job_state_path = state_path.clone();

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();
        let nhl = job_nhl.clone();
        let notifier = job_notifier.clone();
        let state_path = job_state_path.clone();

        Box::pin(async move {
            let service = RotationService::new(&db, &nhl, notifier.as_ref(), state_path);
            match service.check_and_rotate().await {
                Ok(true) => info!("Rotation check completed, draft order rotated"),
                Ok(false) => {}
                Err(e) => error!("Error checking for opponent change: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!(schedule = %schedule, "Rotation poller started");

    Ok(())
}
