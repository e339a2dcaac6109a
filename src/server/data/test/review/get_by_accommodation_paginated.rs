use super::*;

/// Tests listing a listing's reviews.
///
/// Reviews of other listings are excluded and the newest review comes first.
///
/// Expected: Ok with 2 reviews, newest first
#[tokio::test]
async fn returns_reviews_of_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (host, accommodation, guest, first) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let second = factory::create_booking(db, accommodation.id, guest.id).await?;
    let other_listing = factory::create_accommodation(db, host.id).await?;
    let other_booking = factory::create_booking(db, other_listing.id, guest.id).await?;

    let older = factory::create_review(db, &first, 3).await?;
    let newer = factory::create_review(db, &second, 5).await?;
    factory::create_review(db, &other_booking, 1).await?;

    let repo = ReviewRepository::new(db);
    let page = repo
        .get_by_accommodation_paginated(
            accommodation.id,
            PageRequest {
                page: 0,
                per_page: 10,
            },
        )
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(page.items.iter().all(|r| r.author_name == guest.name));

    Ok(())
}
