use super::*;

/// Tests that deleting an amenity also unlinks it from listings.
///
/// Expected: Ok(true) and no remaining links
#[tokio::test]
async fn deletes_amenity_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let amenity = factory::create_amenity(db).await?;
    factory::link_amenity(db, accommodation.id, amenity.id).await?;

    let repo = AmenityRepository::new(db);

    assert!(repo.delete(amenity.id).await?);
    assert!(!repo.delete(amenity.id).await?);
    assert_eq!(
        entity::prelude::AccommodationAmenity::find().count(db).await?,
        0
    );

    Ok(())
}
