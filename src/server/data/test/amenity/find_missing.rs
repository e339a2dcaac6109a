use super::*;

/// Tests detecting unknown amenity IDs.
///
/// Expected: Ok with only the IDs that have no row
#[tokio::test]
async fn returns_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let wifi = factory::create_amenity(db).await?;

    let repo = AmenityRepository::new(db);
    let missing = repo.find_missing(&[wifi.id, 900, 901]).await?;

    assert_eq!(missing, vec![900, 901]);
    assert!(repo.find_missing(&[]).await?.is_empty());

    Ok(())
}
