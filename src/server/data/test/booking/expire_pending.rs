use super::*;

/// Tests cancelling stale pending bookings.
///
/// Expected: Ok(1) with only the old pending booking cancelled
#[tokio::test]
async fn cancels_pending_bookings_older_than_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let now = Utc::now();

    let stale = BookingFactory::new(db, accommodation.id, guest.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let fresh = BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(20), days_from_today(22))
        .created_at(now)
        .build()
        .await?;
    let confirmed = BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(30), days_from_today(32))
        .status("confirmed")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let expired = repo.expire_pending(now - Duration::minutes(30)).await?;

    assert_eq!(expired, 1);
    let stale = repo.get_by_id(stale.id).await?.unwrap();
    let fresh = repo.get_by_id(fresh.id).await?.unwrap();
    let confirmed = repo.get_by_id(confirmed.id).await?.unwrap();
    assert_eq!(stale.status, BookingStatus::Cancelled);
    assert_eq!(fresh.status, BookingStatus::Pending);
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    Ok(())
}
