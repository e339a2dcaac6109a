//! Guest reviews of finished stays.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        accommodation::AccommodationRepository, booking::BookingRepository,
        review::ReviewRepository,
    },
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        booking::BookingStatus,
        pagination::{PageRequest, Paginated},
        review::{CreateReviewParams, Review},
        user::User,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reviews a stay on behalf of the booking's guest.
    ///
    /// The booking must be completed, or confirmed with a check-out on or before
    /// `today`. Each booking can be reviewed once.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller is not the guest
    /// - `Err(BookingError::NotReviewable)` - Stay not over or booking cancelled
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5
    /// - `Err(BookingError::AlreadyReviewed)` - Booking already has a review
    pub async fn create(
        &self,
        user: &User,
        params: CreateReviewParams,
        today: NaiveDate,
    ) -> Result<Review, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(params.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.guest_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to review booking {} of another guest", booking.id),
            )
            .into());
        }

        let stay_over = match booking.status {
            BookingStatus::Completed => true,
            BookingStatus::Confirmed => booking.end_date <= today,
            BookingStatus::Pending | BookingStatus::Cancelled => false,
        };
        if !stay_over {
            return Err(BookingError::NotReviewable(booking.id).into());
        }

        params.validate()?;

        let repo = ReviewRepository::new(self.db);
        if repo.exists_for_booking(booking.id).await? {
            return Err(BookingError::AlreadyReviewed(booking.id).into());
        }

        let review = repo.create(booking.accommodation_id, params).await?;

        tracing::info!(
            "Review {} added to accommodation {} by user {}",
            review.id,
            review.accommodation_id,
            user.id
        );

        Ok(review)
    }

    /// Lists reviews of a listing, newest first.
    pub async fn list_for_accommodation(
        &self,
        accommodation_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<Review>, AppError> {
        if AccommodationRepository::new(self.db)
            .find_owner_id(accommodation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Accommodation not found".to_string()));
        }

        Ok(ReviewRepository::new(self.db)
            .get_by_accommodation_paginated(accommodation_id, page)
            .await?)
    }

    /// Deletes a review. Allowed for its author and admins.
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        let review = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if !user.admin && review.author_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to delete review {} of another user", review.id),
            )
            .into());
        }

        repo.delete(review.id).await?;

        Ok(())
    }
}
