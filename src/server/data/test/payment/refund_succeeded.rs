use super::*;

/// Tests refunding a booking's succeeded payments.
///
/// Failed attempts are left untouched.
///
/// Expected: Ok(1) with the succeeded payment now refunded
#[tokio::test]
async fn refunds_only_succeeded_payments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    repo.create(params(booking.id, PaymentStatus::Failed)).await?;
    repo.create(params(booking.id, PaymentStatus::Succeeded))
        .await?;

    let refunded = repo.refund_succeeded(booking.id).await?;

    assert_eq!(refunded, 1);
    let statuses: Vec<PaymentStatus> = repo
        .get_by_booking(booking.id)
        .await?
        .iter()
        .map(|p| p.status)
        .collect();
    assert_eq!(
        statuses,
        vec![PaymentStatus::Failed, PaymentStatus::Refunded]
    );

    Ok(())
}
