use super::*;

fn params(accommodation_id: i32, guest_id: i32, start: i64, end: i64) -> CreateBookingParams {
    CreateBookingParams {
        accommodation_id,
        guest_id,
        start_date: days_from_today(start),
        end_date: days_from_today(end),
        guests: 2,
        total_price: 30_000,
    }
}

/// Tests creating a booking on free dates.
///
/// Expected: Ok(Some) with status pending
#[tokio::test]
async fn creates_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_if_available(params(accommodation.id, guest.id, 5, 8))
        .await?
        .expect("dates should be free");

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.nights(), 3);
    assert_eq!(booking.total_price, 30_000);

    Ok(())
}

/// Tests that active bookings block overlapping dates.
///
/// Both pending and confirmed bookings hold their nights.
///
/// Expected: Ok(None) for each overlapping request
#[tokio::test]
async fn rejects_overlap_with_active_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(10), days_from_today(15))
        .status("pending")
        .build()
        .await?;
    BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(20), days_from_today(25))
        .status("confirmed")
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(repo
        .create_if_available(params(accommodation.id, guest.id, 12, 14))
        .await?
        .is_none());
    assert!(repo
        .create_if_available(params(accommodation.id, guest.id, 14, 21))
        .await?
        .is_none());

    Ok(())
}

/// Tests that back-to-back stays sharing a boundary day are allowed.
///
/// Expected: Ok(Some) for a stay ending on the existing check-in day and one
/// starting on its check-out day
#[tokio::test]
async fn allows_adjacent_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::booking::create_confirmed_booking(
        db,
        accommodation.id,
        guest.id,
        days_from_today(10),
        days_from_today(15),
    )
    .await?;

    let repo = BookingRepository::new(db);

    assert!(repo
        .create_if_available(params(accommodation.id, guest.id, 5, 10))
        .await?
        .is_some());
    assert!(repo
        .create_if_available(params(accommodation.id, guest.id, 15, 18))
        .await?
        .is_some());

    Ok(())
}

/// Tests that cancelled and completed bookings release their dates.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn ignores_inactive_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(10), days_from_today(15))
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(params(accommodation.id, guest.id, 10, 15))
        .await?;

    assert!(result.is_some());

    Ok(())
}

/// Tests that a corrupted status column surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_status_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let booking = BookingFactory::new(db, accommodation.id, guest.id)
        .status("on-hold")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.get_by_id(booking.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
