use super::*;

/// Tests creating a listing with amenities.
///
/// Verifies that the listing and its amenity links are stored and that the
/// returned model has amenities sorted by name and an empty review summary.
///
/// Expected: Ok with listing created
#[tokio::test]
async fn creates_listing_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let wifi = factory::amenity::create_amenity_named(db, "Wifi").await?;
    let kitchen = factory::amenity::create_amenity_named(db, "Kitchen").await?;

    let repo = AccommodationRepository::new(db);
    let listing = repo
        .create(CreateAccommodationParams {
            owner_id: host.id,
            fields: fields("Sunny loft", vec![wifi.id, kitchen.id]),
        })
        .await?;

    assert_eq!(listing.owner_id, host.id);
    assert_eq!(listing.title, "Sunny loft");
    assert_eq!(listing.available_to, date(2030, 12, 31));
    let names: Vec<&str> = listing.amenities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Kitchen", "Wifi"]);
    assert_eq!(listing.rating.average, None);
    assert_eq!(listing.rating.count, 0);

    let links = entity::prelude::AccommodationAmenity::find().count(db).await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests that the review summary is loaded with the listing.
///
/// Expected: Ok with average 4.5 over 2 reviews
#[tokio::test]
async fn loads_rating_summary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, accommodation) = factory::helpers::create_listing_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let first = factory::create_booking(db, accommodation.id, guest.id).await?;
    let second = factory::create_booking(db, accommodation.id, guest.id).await?;
    factory::create_review(db, &first, 4).await?;
    factory::create_review(db, &second, 5).await?;

    let repo = AccommodationRepository::new(db);
    let listing = repo.get_by_id(accommodation.id).await?.unwrap();

    assert_eq!(listing.rating.average, Some(4.5));
    assert_eq!(listing.rating.count, 2);

    Ok(())
}
