//! Availability lookups backed by the pure calculator in `util::availability`.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{accommodation::AccommodationRepository, booking::BookingRepository},
    error::{internal::InternalError, AppError},
    model::accommodation::AccommodationAvailability,
    util::availability::compute_availability,
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the free date ranges of a listing from its confirmed bookings.
    ///
    /// # Arguments
    /// - `accommodation_id` - Listing to inspect
    /// - `now` - Current instant; ranges start no earlier than the next day
    ///
    /// # Returns
    /// - `Ok(AccommodationAvailability)` - Free ranges, possibly none
    /// - `Err(AppError::NotFound)` - No listing with that ID
    /// - `Err(InternalError::InconsistentBookings)` - Stored bookings overlap or are inverted
    pub async fn get_availability(
        &self,
        accommodation_id: i32,
        now: DateTime<Utc>,
    ) -> Result<AccommodationAvailability, AppError> {
        let accommodation = AccommodationRepository::new(self.db)
            .get_by_id(accommodation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Accommodation not found".to_string()))?;

        let intervals = BookingRepository::new(self.db)
            .get_confirmed_intervals(accommodation_id)
            .await?;

        let availability = compute_availability(
            accommodation.available_from,
            accommodation.available_to,
            &intervals,
            now,
        )
        .map_err(|source| InternalError::InconsistentBookings {
            accommodation_id,
            source,
        })?;

        Ok(AccommodationAvailability {
            accommodation_id,
            availability,
        })
    }
}
