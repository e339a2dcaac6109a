use super::*;

/// Tests that only confirmed bookings are returned, ascending by start date.
///
/// Bookings are inserted out of order and include pending and cancelled rows.
///
/// Expected: Ok with the two confirmed intervals in order
#[tokio::test]
async fn returns_sorted_confirmed_intervals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let later = (days_from_today(30), days_from_today(35));
    let earlier = (days_from_today(10), days_from_today(12));

    factory::booking::create_confirmed_booking(db, accommodation.id, guest.id, later.0, later.1)
        .await?;
    BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(15), days_from_today(18))
        .status("pending")
        .build()
        .await?;
    BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(20), days_from_today(22))
        .status("cancelled")
        .build()
        .await?;
    factory::booking::create_confirmed_booking(
        db,
        accommodation.id,
        guest.id,
        earlier.0,
        earlier.1,
    )
    .await?;

    let repo = BookingRepository::new(db);
    let intervals = repo.get_confirmed_intervals(accommodation.id).await?;

    assert_eq!(
        intervals,
        vec![
            BookingInterval::new(earlier.0, earlier.1),
            BookingInterval::new(later.0, later.1),
        ]
    );

    Ok(())
}
