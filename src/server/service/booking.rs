//! Booking service enforcing reservation rules.
//!
//! Dates are validated against the caller-supplied `today` so the rules are testable
//! without a clock. Overlap detection and insertion happen in one repository
//! transaction.

use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        accommodation::AccommodationRepository, booking::BookingRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        booking::{nights_between, Booking, BookingRequest, CreateBookingParams},
        pagination::{PageRequest, Paginated},
        user::User,
    },
    service::mail::{send_logged, Mail, Mailer},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking after checking every reservation rule.
    ///
    /// # Arguments
    /// - `request` - Guest, listing, dates and party size
    /// - `today` - Current date; the earliest allowed check-in is the day after
    ///
    /// # Returns
    /// - `Ok(Booking)` - Pending booking priced at nights × nightly price
    /// - `Err(AppError::NotFound)` - Listing does not exist
    /// - `Err(BookingError::EmptyRange | StartsInPast | OutsideWindow | InvalidGuestCount | OwnAccommodation)`
    /// - `Err(BookingError::DatesUnavailable)` - An active booking holds some of the nights
    pub async fn create(&self, request: BookingRequest, today: NaiveDate) -> Result<Booking, AppError> {
        if request.start_date >= request.end_date {
            return Err(BookingError::EmptyRange.into());
        }

        let earliest = today
            .checked_add_days(Days::new(1))
            .ok_or(BookingError::StartsInPast { earliest: today })?;
        if request.start_date < earliest {
            return Err(BookingError::StartsInPast { earliest }.into());
        }

        let accommodation = AccommodationRepository::new(self.db)
            .get_by_id(request.accommodation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Accommodation not found".to_string()))?;

        if accommodation.owner_id == request.guest_id {
            return Err(BookingError::OwnAccommodation.into());
        }
        if !accommodation.covers(request.start_date, request.end_date) {
            return Err(BookingError::OutsideWindow {
                available_from: accommodation.available_from,
                available_to: accommodation.available_to,
            }
            .into());
        }
        if request.guests < 1 || request.guests > accommodation.max_guests {
            return Err(BookingError::InvalidGuestCount {
                max_guests: accommodation.max_guests,
            }
            .into());
        }

        let nights = nights_between(request.start_date, request.end_date);
        let total_price = nights
            .checked_mul(accommodation.price_per_night)
            .ok_or_else(|| AppError::BadRequest("Booking total is too large".to_string()))?;

        let booking = BookingRepository::new(self.db)
            .create_if_available(CreateBookingParams {
                accommodation_id: request.accommodation_id,
                guest_id: request.guest_id,
                start_date: request.start_date,
                end_date: request.end_date,
                guests: request.guests,
                total_price,
            })
            .await?
            .ok_or(BookingError::DatesUnavailable)?;

        tracing::info!(
            "Booking {} created for accommodation {} by user {}",
            booking.id,
            booking.accommodation_id,
            booking.guest_id
        );

        Ok(booking)
    }

    /// Gets a booking visible to the caller.
    ///
    /// The guest, the listing's owner and admins may view a booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking found and visible
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller is unrelated to the booking
    pub async fn get_for_user(&self, user: &User, id: i32) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if user.admin || booking.guest_id == user.id {
            return Ok(booking);
        }

        let owner_id = AccommodationRepository::new(self.db)
            .find_owner_id(booking.accommodation_id)
            .await?;
        if owner_id == Some(user.id) {
            return Ok(booking);
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("User attempted to access booking {} of another guest", booking.id),
        )
        .into())
    }

    /// Gets the caller's own bookings, newest first.
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<Booking>, AppError> {
        BookingRepository::new(self.db)
            .get_by_guest_paginated(guest_id, page)
            .await
    }

    /// Gets every booking of a listing. Access is checked by the caller.
    pub async fn list_for_accommodation(
        &self,
        accommodation_id: i32,
    ) -> Result<Vec<Booking>, AppError> {
        BookingRepository::new(self.db)
            .get_by_accommodation(accommodation_id)
            .await
    }

    /// Cancels a booking that has not started yet.
    ///
    /// Succeeded payments of a confirmed booking are marked refunded and the guest is
    /// notified.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Cancelled booking
    /// - `Err(BookingError::NotCancellable)` - Booking is inactive, already started, or
    ///   changed status while being cancelled
    pub async fn cancel(
        &self,
        user: &User,
        id: i32,
        today: NaiveDate,
        mailer: &dyn Mailer,
    ) -> Result<Booking, AppError> {
        let booking = self.get_for_user(user, id).await?;

        if !booking.status.is_active() || booking.start_date <= today {
            return Err(BookingError::NotCancellable(booking.id).into());
        }

        let (cancelled, refunded) = BookingRepository::new(self.db)
            .cancel_if_status(booking.id, booking.status)
            .await?
            .ok_or(BookingError::NotCancellable(booking.id))?;

        if refunded > 0 {
            tracing::info!("Refunded {} payment(s) of booking {}", refunded, booking.id);
        }

        tracing::info!("Booking {} cancelled by user {}", booking.id, user.id);

        if let Some(guest) = UserRepository::new(self.db)
            .find_by_id(cancelled.guest_id)
            .await?
        {
            send_logged(mailer, Mail::booking_cancelled(&guest, &cancelled)).await;
        }

        Ok(cancelled)
    }

    /// Applies time-based status transitions.
    ///
    /// Pending bookings created before `now - pending_ttl` are cancelled and confirmed
    /// bookings that checked out before today are completed.
    ///
    /// # Returns
    /// - `Ok((expired, completed))` - Number of bookings moved by each rule
    pub async fn run_maintenance(
        &self,
        now: DateTime<Utc>,
        pending_ttl: chrono::Duration,
    ) -> Result<(u64, u64), AppError> {
        let repo = BookingRepository::new(self.db);

        let expired = repo.expire_pending(now - pending_ttl).await?;
        let completed = repo.complete_past(now.date_naive()).await?;

        Ok((expired, completed))
    }
}
