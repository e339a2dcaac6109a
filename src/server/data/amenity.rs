use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::amenity::Amenity;

pub struct AmenityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new amenity with the given name
    pub async fn create(&self, name: String) -> Result<Amenity, DbErr> {
        let entity = entity::amenity::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Amenity::from_entity(entity))
    }

    /// Gets all amenities ordered alphabetically
    pub async fn get_all(&self) -> Result<Vec<Amenity>, DbErr> {
        let entities = entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Amenity::from_entity).collect())
    }

    /// Checks whether an amenity with the exact name exists
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the subset of `ids` that don't match any amenity
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<i32> = entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| a.id)
            .collect();

        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }

    /// Deletes an amenity along with its accommodation links.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::AccommodationAmenity::delete_many()
            .filter(entity::accommodation_amenity::Column::AmenityId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Amenity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
