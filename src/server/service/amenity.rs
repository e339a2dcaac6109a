use sea_orm::DatabaseConnection;

use crate::server::{data::amenity::AmenityRepository, error::AppError, model::amenity::Amenity};

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Amenity>, AppError> {
        Ok(AmenityRepository::new(self.db).get_all().await?)
    }

    /// Creates an amenity with a unique, non-empty name.
    ///
    /// # Returns
    /// - `Ok(Amenity)` - Created amenity
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::Conflict)` - Name already exists
    pub async fn create(&self, name: &str) -> Result<Amenity, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Amenity name must not be empty".to_string(),
            ));
        }

        let repo = AmenityRepository::new(self.db);
        if repo.name_exists(name).await? {
            return Err(AppError::Conflict(format!(
                "Amenity '{}' already exists",
                name
            )));
        }

        Ok(repo.create(name.to_string()).await?)
    }

    /// Deletes an amenity and unlinks it from every listing.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AmenityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Amenity not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests blank and duplicate names.
    ///
    /// Expected: BadRequest for blank, Conflict for a trimmed duplicate
    #[tokio::test]
    async fn validates_names() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_marketplace_tables()
            .build()
            .await
            .unwrap();
        let db = &test.db;
        factory::amenity::create_amenity_named(db, "wifi").await?;
        let service = AmenityService::new(db);

        assert!(matches!(
            service.create("   ").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.create(" wifi ").await,
            Err(AppError::Conflict(_))
        ));
        assert_eq!(service.create(" pool ").await?.name, "pool");

        Ok(())
    }

    /// Tests deleting an unknown amenity.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let test = TestBuilder::new()
            .with_marketplace_tables()
            .build()
            .await
            .unwrap();
        let db = &test.db;

        assert!(matches!(
            AmenityService::new(db).delete(42).await,
            Err(AppError::NotFound(_))
        ));
    }
}
