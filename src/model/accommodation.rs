use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::amenity::AmenityDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccommodationDto {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub city: String,
    pub address: String,
    /// Nightly price in minor currency units.
    pub price_per_night: i64,
    pub max_guests: i32,
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
    pub amenities: Vec<AmenityDto>,
    /// Average review rating rounded to one decimal, absent without reviews.
    pub average_rating: Option<f64>,
    pub review_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for both creating and replacing an accommodation listing.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AccommodationFormDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub city: String,
    #[serde(default)]
    pub address: String,
    pub price_per_night: i64,
    pub max_guests: i32,
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
    #[serde(default)]
    pub amenity_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub accommodation_id: i32,
    pub available: bool,
    /// `[start, end]` pairs formatted as `YYYY-MM-DD`, `null` when nothing is free.
    pub available_dates: Option<Vec<[String; 2]>>,
}
