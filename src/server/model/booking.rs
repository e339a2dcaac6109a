//! Booking domain models and lifecycle status.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        error::{internal::InternalError, AppError},
        util::availability::BookingInterval,
    },
};

/// Lifecycle state of a booking.
///
/// `Pending` bookings await payment, `Confirmed` ones are paid. `Cancelled` and
/// `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Whether the booking still holds its dates.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(InternalError::UnknownStatus {
                kind: "booking",
                value: other.to_string(),
            }),
        }
    }
}

/// Number of nights between check-in and check-out.
pub fn nights_between(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub accommodation_id: i32,
    pub guest_id: i32,
    /// Check-in day.
    pub start_date: NaiveDate,
    /// Check-out day.
    pub end_date: NaiveDate,
    pub guests: i32,
    /// Nights times the nightly price at booking time, in minor currency units.
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a domain model.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Status column holds a known value
    /// - `Err(AppError::InternalErr(UnknownStatus))` - Status column is corrupted
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            accommodation_id: entity.accommodation_id,
            guest_id: entity.guest_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            guests: entity.guests,
            total_price: entity.total_price,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            accommodation_id: self.accommodation_id,
            guest_id: self.guest_id,
            start_date: self.start_date,
            end_date: self.end_date,
            nights: self.nights(),
            guests: self.guests,
            total_price: self.total_price,
            status: self.status.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn nights(&self) -> i64 {
        nights_between(self.start_date, self.end_date)
    }

    pub fn interval(&self) -> BookingInterval {
        BookingInterval::new(self.start_date, self.end_date)
    }
}

/// Stay requested by a guest, before pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub accommodation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: i32,
}

impl BookingRequest {
    pub fn from_dto(guest_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            accommodation_id: dto.accommodation_id,
            guest_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            guests: dto.guests,
        }
    }
}

/// Validated, priced booking ready to be inserted.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub accommodation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: i32,
    pub total_price: i64,
}
