//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and emails to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Date `days` days from today (UTC).
///
/// Bookings must start tomorrow or later, so most fixtures are expressed relative
/// to the current date.
pub fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

/// Creates a host user and a listing they own.
///
/// The listing uses the factory defaults, including an availability window
/// from today to one year ahead.
///
/// # Returns
/// - `Ok((host, accommodation))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::accommodation::Model), DbErr> {
    let host = crate::factory::user::create_user(db).await?;
    let accommodation = crate::factory::accommodation::create_accommodation(db, host.id).await?;

    Ok((host, accommodation))
}

/// Creates a host, a listing, a guest and a booking of that listing by the guest.
///
/// The booking uses the factory defaults (pending, starting in one week).
///
/// # Returns
/// - `Ok((host, accommodation, guest, booking))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::accommodation::Model,
        entity::user::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (host, accommodation) = create_listing_with_owner(db).await?;
    let guest = crate::factory::user::create_user(db).await?;
    let booking =
        crate::factory::booking::create_booking(db, accommodation.id, guest.id).await?;

    Ok((host, accommodation, guest, booking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_booking_graph() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_marketplace_tables()
            .build()
            .await
            .unwrap();
        let db = &test.db;

        let (host, accommodation, guest, booking) = create_booking_with_dependencies(db).await?;

        assert_eq!(accommodation.owner_id, host.id);
        assert_eq!(booking.accommodation_id, accommodation.id);
        assert_eq!(booking.guest_id, guest.id);
        assert_ne!(host.id, guest.id);

        Ok(())
    }
}
