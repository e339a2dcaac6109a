use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests that deleting a listing removes every dependent row.
///
/// Creates bookings, a payment, a review, a wishlist entry and an amenity link
/// for one listing and a booking for another.
///
/// Expected: Ok(true) with only the other listing's rows left
#[tokio::test]
async fn cascades_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (host, accommodation, guest, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let amenity = factory::create_amenity(db).await?;
    factory::link_amenity(db, accommodation.id, amenity.id).await?;
    factory::create_review(db, &booking, 5).await?;
    entity::wishlist_item::ActiveModel {
        user_id: ActiveValue::Set(guest.id),
        accommodation_id: ActiveValue::Set(accommodation.id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await?;
    entity::payment::ActiveModel {
        booking_id: ActiveValue::Set(booking.id),
        amount: ActiveValue::Set(booking.total_price),
        currency: ActiveValue::Set("usd".to_string()),
        provider_reference: ActiveValue::Set(None),
        status: ActiveValue::Set("succeeded".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let other = factory::create_accommodation(db, host.id).await?;
    factory::create_booking(db, other.id, guest.id).await?;

    let repo = AccommodationRepository::new(db);
    let deleted = repo.delete(accommodation.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(accommodation.id).await?.is_none());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::WishlistItem::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::AccommodationAmenity::find().count(db).await?,
        0
    );
    assert_eq!(entity::prelude::Amenity::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a missing listing.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = AccommodationRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
