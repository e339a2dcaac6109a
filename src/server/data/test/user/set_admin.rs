use super::*;

/// Tests granting and revoking admin.
///
/// Expected: Ok(Some) with the flag updated each time
#[tokio::test]
async fn toggles_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let promoted = repo.set_admin(user.id, true).await?.unwrap();
    assert!(promoted.admin);

    let demoted = repo.set_admin(user.id, false).await?.unwrap();
    assert!(!demoted.admin);

    Ok(())
}

/// Tests setting admin on a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let result = repo.set_admin(999, true).await?;

    assert!(result.is_none());

    Ok(())
}
