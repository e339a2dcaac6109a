use super::*;

/// Tests confirming a pending booking.
///
/// Expected: Ok(Some) with the booking confirmed and the payment stored
#[tokio::test]
async fn confirms_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let (confirmed, payment) = BookingRepository::new(db)
        .confirm_with_payment(booking.id, succeeded_payment(booking.id))
        .await?
        .unwrap();

    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert_eq!(payment.booking_id, booking.id);
    assert_eq!(payment.status, PaymentStatus::Succeeded);

    Ok(())
}

/// Tests confirming a booking that was cancelled in the meantime.
///
/// Expected: Ok(None), booking still cancelled and no payment written
#[tokio::test]
async fn leaves_cancelled_booking_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let booking = BookingFactory::new(db, accommodation.id, guest.id)
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .confirm_with_payment(booking.id, succeeded_payment(booking.id))
        .await?;

    assert!(result.is_none());
    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);
    assert!(PaymentRepository::new(db)
        .get_by_booking(booking.id)
        .await?
        .is_empty());

    Ok(())
}
