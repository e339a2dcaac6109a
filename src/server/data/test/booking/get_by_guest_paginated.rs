use super::*;

/// Tests listing a guest's bookings newest first.
///
/// Bookings of another guest are excluded.
///
/// Expected: Ok with the guest's bookings in descending creation order
#[tokio::test]
async fn returns_guest_bookings_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let older = BookingFactory::new(db, accommodation.id, guest.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(20), days_from_today(21))
        .created_at(now)
        .build()
        .await?;
    factory::create_booking(db, accommodation.id, other.id).await?;

    let repo = BookingRepository::new(db);
    let page = repo
        .get_by_guest_paginated(
            guest.id,
            PageRequest {
                page: 0,
                per_page: 10,
            },
        )
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.items.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
