use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::booking::BookingService};

/// Starts the booking maintenance scheduler
///
/// Runs every minute and:
/// - cancels pending bookings left unpaid for longer than `pending_ttl`
/// - completes confirmed bookings whose check-out day has passed
///
/// # Arguments
/// - `db`: Database connection
/// - `pending_ttl`: How long a booking may stay pending before it expires
pub async fn start_scheduler(
    db: DatabaseConnection,
    pending_ttl: chrono::Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = process_bookings(&db, pending_ttl).await {
                tracing::error!("Error processing booking maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking maintenance scheduler started");

    Ok(scheduler)
}

async fn process_bookings(
    db: &DatabaseConnection,
    pending_ttl: chrono::Duration,
) -> Result<(), AppError> {
    let (expired, completed) = BookingService::new(db)
        .run_maintenance(Utc::now(), pending_ttl)
        .await?;

    if expired > 0 {
        tracing::info!("Expired {} unpaid booking(s)", expired);
    }
    if completed > 0 {
        tracing::info!("Completed {} finished booking(s)", completed);
    }

    Ok(())
}
