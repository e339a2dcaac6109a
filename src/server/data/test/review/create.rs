use super::*;

/// Tests creating a review with the author's name attached.
///
/// Expected: Ok with review created and the booking marked as reviewed
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation, guest, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    assert!(!repo.exists_for_booking(booking.id).await?);

    let review = repo
        .create(
            accommodation.id,
            CreateReviewParams {
                booking_id: booking.id,
                author_id: guest.id,
                rating: 4,
                comment: "Lovely".to_string(),
            },
        )
        .await?;

    assert_eq!(review.author_name, guest.name);
    assert_eq!(review.rating, 4);
    assert_eq!(review.accommodation_id, accommodation.id);
    assert!(repo.exists_for_booking(booking.id).await?);

    Ok(())
}

/// Tests that a booking can only be reviewed once.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_second_review_for_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation, guest, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    factory::create_review(db, &booking, 5).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(
            accommodation.id,
            CreateReviewParams {
                booking_id: booking.id,
                author_id: guest.id,
                rating: 3,
                comment: String::new(),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
