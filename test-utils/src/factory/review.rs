//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review of `booking` by its guest with the given rating.
pub async fn create_review(
    db: &DatabaseConnection,
    booking: &entity::booking::Model,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        accommodation_id: ActiveValue::Set(booking.accommodation_id),
        booking_id: ActiveValue::Set(booking.id),
        author_id: ActiveValue::Set(booking.guest_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(format!("Rated {} stars", rating)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
