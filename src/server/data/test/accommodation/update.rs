use super::*;

/// Tests replacing fields and amenity links.
///
/// Expected: Ok(Some) with new fields and only the new amenity linked
#[tokio::test]
async fn replaces_fields_and_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let old_amenity = factory::create_amenity(db).await?;
    let new_amenity = factory::create_amenity(db).await?;
    factory::link_amenity(db, accommodation.id, old_amenity.id).await?;

    let repo = AccommodationRepository::new(db);
    let updated = repo
        .update(UpdateAccommodationParams {
            id: accommodation.id,
            fields: fields("Renovated loft", vec![new_amenity.id]),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renovated loft");
    assert_eq!(updated.city, "Lisbon");
    assert_eq!(updated.price_per_night, 12_000);
    assert_eq!(updated.amenities.len(), 1);
    assert_eq!(updated.amenities[0].id, new_amenity.id);
    assert!(updated.updated_at >= accommodation.updated_at);

    Ok(())
}

/// Tests updating a missing listing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = AccommodationRepository::new(db);
    let result = repo
        .update(UpdateAccommodationParams {
            id: 42,
            fields: fields("Ghost", vec![]),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
