use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores every field and counts the new account.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com", true)).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert!(user.admin);
    assert_eq!(repo.count().await?, 1);
    assert!(repo.email_exists("ada@example.com").await?);

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err(DbErr) on second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    repo.create(params("ada@example.com", false)).await?;
    let result = repo.create(params("ada@example.com", false)).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
