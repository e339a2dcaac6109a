use super::*;

/// Tests removing a saved listing, twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn remove_reports_whether_entry_existed() -> Result<(), DbErr> {
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

    assert!(repo.remove(user.id, accommodation.id).await?);
    assert!(!repo.remove(user.id, accommodation.id).await?);
    assert!(repo.get_for_user(user.id).await?.is_empty());

    Ok(())
}
