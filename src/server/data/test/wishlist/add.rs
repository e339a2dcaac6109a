use super::*;

/// Tests that saving the same listing twice keeps one entry.
///
/// Expected: Ok with a single wishlist entry
#[tokio::test]
async fn add_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = WishlistRepository::new(db);
    repo.add(user.id, accommodation.id).await?;
    repo.add(user.id, accommodation.id).await?;

    let entries = repo.get_for_user(user.id).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].accommodation.id, accommodation.id);

    Ok(())
}
