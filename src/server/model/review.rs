//! Review domain models and rating aggregation.

use chrono::{DateTime, Utc};

use crate::{model::review::ReviewDto, server::error::AppError};

/// Guest review left after a completed stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub accommodation_id: i32,
    pub booking_id: i32,
    pub author_id: i32,
    pub author_name: String,
    /// Star rating from 1 to 5.
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            accommodation_id: entity.accommodation_id,
            booking_id: entity.booking_id,
            author_id: entity.author_id,
            author_name,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            accommodation_id: self.accommodation_id,
            booking_id: self.booking_id,
            author_id: self.author_id,
            author_name: self.author_name,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub booking_id: i32,
    pub author_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    pub const MIN_RATING: i32 = 1;
    pub const MAX_RATING: i32 = 5;

    pub fn validate(&self) -> Result<(), AppError> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                Self::MIN_RATING,
                Self::MAX_RATING
            )));
        }
        Ok(())
    }
}

/// Average rating and review count of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal, `None` without reviews.
    pub average: Option<f64>,
    pub count: u64,
}

impl RatingSummary {
    pub fn from_totals(sum: i64, count: u64) -> Self {
        if count == 0 {
            return Self::default();
        }

        let average = (sum as f64 / count as f64 * 10.0).round() / 10.0;
        Self {
            average: Some(average),
            count,
        }
    }
}
