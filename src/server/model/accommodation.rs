//! Accommodation listing domain models and parameters.
//!
//! A listing carries its lifetime availability window (`available_from..=available_to`),
//! the amenities it offers, and a summary of its reviews. Parameter types validate
//! client input before it reaches the repository.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::accommodation::{AccommodationDto, AccommodationFormDto, AvailabilityDto},
    server::{
        error::AppError,
        model::{amenity::Amenity, review::RatingSummary},
        util::availability::Availability,
    },
};

/// Accommodation listing with its amenities and review summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: i32,
    /// User ID of the host.
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub city: String,
    pub address: String,
    /// Nightly price in minor currency units.
    pub price_per_night: i64,
    pub max_guests: i32,
    /// First bookable day of the listing's lifetime.
    pub available_from: NaiveDate,
    /// Last day of the listing's lifetime.
    pub available_to: NaiveDate,
    pub amenities: Vec<Amenity>,
    pub rating: RatingSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Accommodation {
    /// Converts an entity model with its enrichments to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The accommodation row
    /// - `amenities` - Amenities linked to the listing
    /// - `rating` - Aggregated review data for the listing
    pub fn from_entity(
        entity: entity::accommodation::Model,
        amenities: Vec<Amenity>,
        rating: RatingSummary,
    ) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            title: entity.title,
            description: entity.description,
            city: entity.city,
            address: entity.address,
            price_per_night: entity.price_per_night,
            max_guests: entity.max_guests,
            available_from: entity.available_from,
            available_to: entity.available_to,
            amenities,
            rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AccommodationDto {
        AccommodationDto {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            city: self.city,
            address: self.address,
            price_per_night: self.price_per_night,
            max_guests: self.max_guests,
            available_from: self.available_from,
            available_to: self.available_to,
            amenities: self.amenities.into_iter().map(|a| a.into_dto()).collect(),
            average_rating: self.rating.average,
            review_count: self.rating.count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether a stay from `start` to `end` fits inside the availability window.
    pub fn covers(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start >= self.available_from && end <= self.available_to
    }
}

/// Editable listing fields shared by create and update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationFields {
    pub title: String,
    pub description: String,
    pub city: String,
    pub address: String,
    pub price_per_night: i64,
    pub max_guests: i32,
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
    pub amenity_ids: Vec<i32>,
}

impl AccommodationFields {
    /// Converts the form DTO, trimming text fields and de-duplicating amenity IDs.
    pub fn from_dto(dto: AccommodationFormDto) -> Self {
        let mut amenity_ids = dto.amenity_ids;
        amenity_ids.sort_unstable();
        amenity_ids.dedup();

        Self {
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            city: dto.city.trim().to_string(),
            address: dto.address.trim().to_string(),
            price_per_night: dto.price_per_night,
            max_guests: dto.max_guests,
            available_from: dto.available_from,
            available_to: dto.available_to,
            amenity_ids,
        }
    }

    /// Checks field-level constraints.
    ///
    /// # Returns
    /// - `Ok(())` - All fields valid
    /// - `Err(AppError::BadRequest)` - First violated constraint
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }
        if self.city.is_empty() {
            return Err(AppError::BadRequest("City must not be empty".to_string()));
        }
        if self.price_per_night <= 0 {
            return Err(AppError::BadRequest(
                "Price per night must be greater than zero".to_string(),
            ));
        }
        if self.max_guests < 1 {
            return Err(AppError::BadRequest(
                "An accommodation must host at least one guest".to_string(),
            ));
        }
        if self.available_from > self.available_to {
            return Err(AppError::BadRequest(
                "Availability window must not end before it starts".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CreateAccommodationParams {
    pub owner_id: i32,
    pub fields: AccommodationFields,
}

#[derive(Debug, Clone)]
pub struct UpdateAccommodationParams {
    pub id: i32,
    pub fields: AccommodationFields,
}

/// Browse filters; every `None`/empty field is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccommodationFilter {
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// Party size the listing must accommodate.
    pub guests: Option<i32>,
    /// Every listed amenity must be offered.
    pub amenity_ids: Vec<i32>,
    /// Stay the availability window must cover.
    pub stay: Option<(NaiveDate, NaiveDate)>,
}

/// Free date ranges computed for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationAvailability {
    pub accommodation_id: i32,
    pub availability: Availability,
}

impl AccommodationAvailability {
    pub fn into_dto(self) -> AvailabilityDto {
        let available_dates = if self.availability.available {
            Some(
                self.availability
                    .ranges
                    .iter()
                    .map(|range| range.formatted())
                    .collect(),
            )
        } else {
            None
        };

        AvailabilityDto {
            accommodation_id: self.accommodation_id,
            available: self.availability.available,
            available_dates,
        }
    }
}
