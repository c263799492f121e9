use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{breeding::BreedingService, nursery::NurseryService},
};

/// Starts the session cleanup scheduler
///
/// Runs at the top of every hour and deletes breeding and hatch sessions
/// older than `ttl_hours`.
///
/// # Arguments
/// - `db`: Database connection
/// - `ttl_hours`: Age in hours after which a session expires
pub async fn start_scheduler(db: DatabaseConnection, ttl_hours: i64) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_sessions(&db, ttl_hours).await {
                tracing::error!("Error purging expired sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session cleanup scheduler started");

    Ok(())
}

/// Deletes expired breeding and hatch sessions.
///
/// A TTL too large to subtract from the current time expires nothing.
///
/// # Returns
/// - `Ok((breeding, hatch))` - Number of sessions deleted of each kind
pub async fn purge_expired_sessions(
    db: &DatabaseConnection,
    ttl_hours: i64,
) -> Result<(u64, u64), AppError> {
    let cutoff = Duration::try_hours(ttl_hours)
        .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let breeding = BreedingService::new(db).purge_expired(cutoff).await?;
    let hatch = NurseryService::new(db).purge_expired(cutoff).await?;

    if breeding + hatch > 0 {
        tracing::info!(
            "Purged {} breeding and {} hatch sessions older than {} hours",
            breeding,
            hatch,
            ttl_hours
        );
    }

    Ok((breeding, hatch))
}
