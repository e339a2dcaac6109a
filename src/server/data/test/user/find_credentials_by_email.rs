use super::*;

/// Tests looking up credentials for login.
///
/// Expected: Ok(Some) carrying the stored digest
#[tokio::test]
async fn returns_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let created = repo.create(params("ada@example.com", false)).await?;

    let credentials = repo
        .find_credentials_by_email("ada@example.com")
        .await?
        .expect("credentials should exist");

    assert_eq!(credentials.user.id, created.id);
    assert_eq!(credentials.password_hash, "salt$digest");

    Ok(())
}

/// Tests looking up an unregistered email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
