use sea_orm::DatabaseConnection;

use crate::server::{
    data::{accommodation::AccommodationRepository, wishlist::WishlistRepository},
    error::AppError,
    model::wishlist::WishlistEntry,
};

pub struct WishlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<WishlistEntry>, AppError> {
        Ok(WishlistRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Saves a listing. Saving twice is a no-op; unknown listings are 404.
    pub async fn add(&self, user_id: i32, accommodation_id: i32) -> Result<(), AppError> {
        if AccommodationRepository::new(self.db)
            .find_owner_id(accommodation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Accommodation not found".to_string()));
        }

        WishlistRepository::new(self.db)
            .add(user_id, accommodation_id)
            .await?;

        Ok(())
    }

    /// Removes a saved listing. Removing an unsaved listing is a no-op.
    pub async fn remove(&self, user_id: i32, accommodation_id: i32) -> Result<(), AppError> {
        WishlistRepository::new(self.db)
            .remove(user_id, accommodation_id)
            .await?;

        Ok(())
    }
}
