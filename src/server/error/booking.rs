use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Start date is not strictly before end date.
    #[error("A booking must span at least one night")]
    EmptyRange,

    /// Booking starts today or earlier.
    #[error("Bookings must start on {earliest} or later")]
    StartsInPast { earliest: NaiveDate },

    /// Requested dates fall outside the listing's availability window.
    #[error("Accommodation is only available from {available_from} to {available_to}")]
    OutsideWindow {
        available_from: NaiveDate,
        available_to: NaiveDate,
    },

    /// Guest count is zero or above the listing's capacity.
    #[error("Guest count must be between 1 and {max_guests}")]
    InvalidGuestCount { max_guests: i32 },

    /// Hosts cannot reserve their own listing.
    #[error("You cannot book your own accommodation")]
    OwnAccommodation,

    /// Requested dates collide with an active booking.
    #[error("Accommodation is already booked for the selected dates")]
    DatesUnavailable,

    /// Booking is cancelled, completed, or already started.
    #[error("Booking {0} can no longer be cancelled")]
    NotCancellable(i32),

    /// Booking is not awaiting payment.
    #[error("Booking {0} is not awaiting payment")]
    NotPayable(i32),

    /// Stay has not finished yet, or the booking was cancelled.
    #[error("Booking {0} cannot be reviewed until the stay is over")]
    NotReviewable(i32),

    /// A review already exists for this booking.
    #[error("Booking {0} has already been reviewed")]
    AlreadyReviewed(i32),
}

/// Converts booking rule violations into HTTP responses.
///
/// - Input problems (`EmptyRange`, `StartsInPast`, `OutsideWindow`, `InvalidGuestCount`,
///   `OwnAccommodation`) → 400 Bad Request
/// - State conflicts (`DatesUnavailable`, `NotCancellable`, `NotPayable`, `NotReviewable`,
///   `AlreadyReviewed`) → 409 Conflict
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmptyRange
            | Self::StartsInPast { .. }
            | Self::OutsideWindow { .. }
            | Self::InvalidGuestCount { .. }
            | Self::OwnAccommodation => StatusCode::BAD_REQUEST,
            Self::DatesUnavailable
            | Self::NotCancellable(_)
            | Self::NotPayable(_)
            | Self::NotReviewable(_)
            | Self::AlreadyReviewed(_) => StatusCode::CONFLICT,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
