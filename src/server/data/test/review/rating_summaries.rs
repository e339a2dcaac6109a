use super::*;

/// Tests aggregating ratings per listing.
///
/// Expected: Ok with per-listing averages and no entry for the unreviewed listing
#[tokio::test]
async fn aggregates_per_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let reviewed = factory::create_accommodation(db, host.id).await?;
    let unreviewed = factory::create_accommodation(db, host.id).await?;

    for rating in [5, 4, 4] {
        let booking = factory::create_booking(db, reviewed.id, guest.id).await?;
        factory::create_review(db, &booking, rating).await?;
    }

    let repo = ReviewRepository::new(db);
    let summaries = repo
        .rating_summaries(&[reviewed.id, unreviewed.id])
        .await?;

    let summary = summaries[&reviewed.id];
    assert_eq!(summary.count, 3);
    assert_eq!(summary.average, Some(4.3));
    assert!(!summaries.contains_key(&unreviewed.id));

    Ok(())
}
