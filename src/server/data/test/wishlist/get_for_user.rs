use super::*;

/// Tests that a user's wishlist contains only their own entries.
///
/// Expected: Ok with both saved listings and none of the other user's
#[tokio::test]
async fn returns_only_users_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let first = factory::create_accommodation(db, host.id).await?;
    let second = factory::create_accommodation(db, host.id).await?;
    let other_listing = factory::create_accommodation(db, host.id).await?;
    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;

    let repo = WishlistRepository::new(db);
    repo.add(user.id, first.id).await?;
    repo.add(user.id, second.id).await?;
    repo.add(other_user.id, other_listing.id).await?;

    let mut ids: Vec<i32> = repo
        .get_for_user(user.id)
        .await?
        .into_iter()
        .map(|entry| entry.accommodation.id)
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
