//! Amenity factory and listing link helper.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an amenity named `"Amenity {id}"`.
pub async fn create_amenity(db: &DatabaseConnection) -> Result<entity::amenity::Model, DbErr> {
    create_amenity_named(db, format!("Amenity {}", next_id())).await
}

/// Creates an amenity with a specific name.
pub async fn create_amenity_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::amenity::Model, DbErr> {
    entity::amenity::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links an existing amenity to an existing listing.
pub async fn link_amenity(
    db: &DatabaseConnection,
    accommodation_id: i32,
    amenity_id: i32,
) -> Result<entity::accommodation_amenity::Model, DbErr> {
    entity::accommodation_amenity::ActiveModel {
        accommodation_id: ActiveValue::Set(accommodation_id),
        amenity_id: ActiveValue::Set(amenity_id),
    }
    .insert(db)
    .await
}
