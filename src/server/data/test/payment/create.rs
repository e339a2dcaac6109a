use super::*;

/// Tests recording charge attempts and reading the history back.
///
/// Expected: Ok with attempts in recording order
#[tokio::test]
async fn records_payment_history() -> Result<(), AppError> {
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

    let history = repo.get_by_booking(booking.id).await?;

    let statuses: Vec<PaymentStatus> = history.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![PaymentStatus::Failed, PaymentStatus::Succeeded]
    );
    assert_eq!(history[0].amount, 30_000);
    assert_eq!(history[0].currency, "usd");

    Ok(())
}
