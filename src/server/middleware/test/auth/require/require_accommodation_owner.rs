use super::*;

/// Tests that the owner passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (host, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    AuthSession::new(session).set_user_id(host.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::AccommodationOwner(accommodation.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that other users fail the ownership check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(stranger.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::AccommodationOwner(accommodation.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that admins pass the ownership check for any listing.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_admin_for_any_listing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::AccommodationOwner(accommodation.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the ownership check on a missing listing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_listing_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::AccommodationOwner(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
