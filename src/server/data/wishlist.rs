use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::accommodation::AccommodationRepository, model::wishlist::WishlistEntry};

pub struct WishlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves a listing for a user. Saving an already saved listing is a no-op.
    pub async fn add(&self, user_id: i32, accommodation_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::WishlistItem::find_by_id((user_id, accommodation_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        entity::wishlist_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            accommodation_id: ActiveValue::Set(accommodation_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a saved listing. Returns whether an entry existed.
    pub async fn remove(&self, user_id: i32, accommodation_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::WishlistItem::delete_by_id((user_id, accommodation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's saved listings, most recently saved first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<WishlistEntry>, DbErr> {
        let items = entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .order_by_desc(entity::wishlist_item::Column::CreatedAt)
            .order_by_desc(entity::wishlist_item::Column::AccommodationId)
            .all(self.db)
            .await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = items.iter().map(|item| item.accommodation_id).collect();
        let entities = entity::prelude::Accommodation::find()
            .filter(entity::accommodation::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        let mut accommodations: HashMap<i32, _> = AccommodationRepository::new(self.db)
            .with_details(entities)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(items
            .into_iter()
            .filter_map(|item| {
                accommodations
                    .remove(&item.accommodation_id)
                    .map(|accommodation| WishlistEntry {
                        accommodation,
                        added_at: item.created_at,
                    })
            })
            .collect())
    }
}
