use super::*;

/// Tests completing confirmed stays that have ended.
///
/// A stay ending today is still in progress on its check-out day and is left alone.
///
/// Expected: Ok(1) with only the finished stay completed
#[tokio::test]
async fn completes_finished_confirmed_stays() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;

    let finished = factory::booking::create_confirmed_booking(
        db,
        accommodation.id,
        guest.id,
        days_from_today(-5),
        days_from_today(-1),
    )
    .await?;
    let ending_today = factory::booking::create_confirmed_booking(
        db,
        accommodation.id,
        guest.id,
        days_from_today(-1),
        days_from_today(0),
    )
    .await?;
    let pending_past = BookingFactory::new(db, accommodation.id, guest.id)
        .dates(days_from_today(-9), days_from_today(-7))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let completed = repo.complete_past(days_from_today(0)).await?;

    assert_eq!(completed, 1);
    let finished = repo.get_by_id(finished.id).await?.unwrap();
    let ending_today = repo.get_by_id(ending_today.id).await?.unwrap();
    let pending_past = repo.get_by_id(pending_past.id).await?.unwrap();
    assert_eq!(finished.status, BookingStatus::Completed);
    assert_eq!(ending_today.status, BookingStatus::Confirmed);
    assert_eq!(pending_past.status, BookingStatus::Pending);

    Ok(())
}
