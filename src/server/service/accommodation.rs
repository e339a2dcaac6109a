//! Accommodation listing service.
//!
//! Ownership checks happen in the controller through `AuthGuard`; this service
//! validates listing content and resolves amenity references.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{accommodation::AccommodationRepository, amenity::AmenityRepository},
    error::AppError,
    model::{
        accommodation::{
            Accommodation, AccommodationFields, AccommodationFilter, CreateAccommodationParams,
            UpdateAccommodationParams,
        },
        pagination::{PageRequest, Paginated},
    },
};

pub struct AccommodationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccommodationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing owned by `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Accommodation)` - Created listing with amenities
    /// - `Err(AppError::BadRequest)` - Invalid field or unknown amenity ID
    pub async fn create(&self, params: CreateAccommodationParams) -> Result<Accommodation, AppError> {
        self.check_fields(&params.fields).await?;

        let accommodation = AccommodationRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Accommodation {} created by user {}",
            accommodation.id,
            accommodation.owner_id
        );

        Ok(accommodation)
    }

    pub async fn get(&self, id: i32) -> Result<Accommodation, AppError> {
        AccommodationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Accommodation not found".to_string()))
    }

    /// Browses listings, newest first.
    ///
    /// # Returns
    /// - `Ok(Paginated<Accommodation>)` - Matching listings
    /// - `Err(AppError::BadRequest)` - Inverted price bounds or stay dates
    pub async fn search(
        &self,
        filter: AccommodationFilter,
        page: PageRequest,
    ) -> Result<Paginated<Accommodation>, AppError> {
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(AppError::BadRequest(
                    "min_price must not exceed max_price".to_string(),
                ));
            }
        }
        if let Some((start, end)) = filter.stay {
            if start >= end {
                return Err(AppError::BadRequest(
                    "available_from must be before available_to".to_string(),
                ));
            }
        }

        Ok(AccommodationRepository::new(self.db)
            .search(&filter, page)
            .await?)
    }

    /// Replaces a listing's editable fields and amenities.
    ///
    /// # Returns
    /// - `Ok(Accommodation)` - Updated listing
    /// - `Err(AppError::BadRequest)` - Invalid field or unknown amenity ID
    /// - `Err(AppError::NotFound)` - No listing with that ID
    pub async fn update(&self, params: UpdateAccommodationParams) -> Result<Accommodation, AppError> {
        self.check_fields(&params.fields).await?;

        AccommodationRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Accommodation not found".to_string()))
    }

    /// Deletes a listing together with its bookings, payments, reviews and saves.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AccommodationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Accommodation not found".to_string()));
        }

        tracing::info!("Accommodation {} deleted", id);

        Ok(())
    }

    async fn check_fields(&self, fields: &AccommodationFields) -> Result<(), AppError> {
        fields.validate()?;

        let missing = AmenityRepository::new(self.db)
            .find_missing(&fields.amenity_ids)
            .await?;
        if !missing.is_empty() {
            let ids: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
            return Err(AppError::BadRequest(format!(
                "Unknown amenity IDs: {}",
                ids.join(", ")
            )));
        }

        Ok(())
    }
}
