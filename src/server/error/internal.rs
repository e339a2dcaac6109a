use thiserror::Error;

use crate::server::util::availability::AvailabilityError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored status string does not match any known variant
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} status '{value}' stored in database")]
    UnknownStatus {
        /// Which status column was being parsed
        kind: &'static str,
        /// The value read from the database
        value: String,
    },

    /// Confirmed bookings of an accommodation are unsorted or overlapping
    ///
    /// Signals corrupted booking data. Results in a 500 Internal Server Error with
    /// a generic message returned to client.
    #[error("Inconsistent bookings for accommodation {accommodation_id}: {source}")]
    InconsistentBookings {
        accommodation_id: i32,
        #[source]
        source: AvailabilityError,
    },
}
