use super::*;

/// Tests cancelling a confirmed booking.
///
/// Expected: Ok(Some((cancelled, 1))) with the succeeded payment refunded
#[tokio::test]
async fn cancels_and_refunds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let booking = BookingFactory::new(db, accommodation.id, guest.id)
        .status("confirmed")
        .build()
        .await?;
    let payments = PaymentRepository::new(db);
    payments.create(succeeded_payment(booking.id)).await?;

    let (cancelled, refunded) = BookingRepository::new(db)
        .cancel_if_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(refunded, 1);
    let history = payments.get_by_booking(booking.id).await?;
    assert_eq!(history[0].status, PaymentStatus::Refunded);

    Ok(())
}

/// Tests cancelling with a stale status, as when a payment confirms the booking
/// between the read and the cancel.
///
/// Expected: Ok(None), booking still confirmed and its payment still succeeded
#[tokio::test]
async fn rejects_stale_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let repo = BookingRepository::new(db);
    repo.confirm_with_payment(booking.id, succeeded_payment(booking.id))
        .await?
        .unwrap();

    let result = repo
        .cancel_if_status(booking.id, BookingStatus::Pending)
        .await?;

    assert!(result.is_none());
    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);
    let history = PaymentRepository::new(db).get_by_booking(booking.id).await?;
    assert_eq!(history[0].status, PaymentStatus::Succeeded);

    Ok(())
}
