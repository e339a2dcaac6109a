//! Free date range computation for accommodation listings.
//!
//! Projects an accommodation's availability window and its confirmed booking intervals
//! onto the list of date ranges a new booking could still occupy. The computation is
//! pure: it performs no I/O, holds no state, and takes the current instant as an
//! argument so callers decide which clock to use.
//!
//! Ranges share boundary days with the bookings around them. A free range ends on the
//! start date of the next booking and the following range begins on the end date of
//! that booking, so a turnover day is never credited as an additional free night.

use chrono::{DateTime, Days, NaiveDate, Utc};
use thiserror::Error;

/// Calendar day format used when rendering range boundaries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date span occupied by a confirmed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingInterval {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingInterval {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// Contiguous stretch of days on or after tomorrow without any booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FreeRange {
    /// Renders both boundaries as `YYYY-MM-DD` strings.
    pub fn formatted(&self) -> [String; 2] {
        [
            self.start.format(DATE_FORMAT).to_string(),
            self.end.format(DATE_FORMAT).to_string(),
        ]
    }
}

/// Result of an availability computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// `true` when at least one free range exists.
    pub available: bool,
    /// Free ranges in ascending order, pairwise non-overlapping.
    pub ranges: Vec<FreeRange>,
}

impl Availability {
    fn unavailable() -> Self {
        Self {
            available: false,
            ranges: Vec::new(),
        }
    }
}

/// Data-integrity violations detected in the booking intervals.
///
/// Booking intervals are expected to arrive sorted by start date and free of overlaps.
/// Any violation means the stored bookings are inconsistent, so the computation stops
/// instead of producing ranges that might double-book a listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    /// A booking interval ends before it starts.
    #[error("Booking interval {start}..{end} ends before it starts")]
    InvertedInterval { start: NaiveDate, end: NaiveDate },

    /// A booking interval starts before the interval preceding it.
    #[error("Booking interval starting {start} is listed after one starting {previous_start}")]
    Unsorted {
        previous_start: NaiveDate,
        start: NaiveDate,
    },

    /// A booking interval starts before the preceding interval has ended.
    #[error("Booking interval starting {start} overlaps a booking ending {previous_end}")]
    Overlapping {
        previous_end: NaiveDate,
        start: NaiveDate,
    },
}

/// Computes the free date ranges of an accommodation.
///
/// The earliest bookable day is tomorrow relative to `now` (UTC). The walk starts at the
/// later of `available_from` and tomorrow, emits a gap before every booking that starts
/// after the cursor, then moves the cursor to the booking's end date. The cursor only
/// moves forward, so bookings lying before it are absorbed without emitting anything.
/// A trailing range up to `available_to` is emitted when the cursor stops short of it.
///
/// # Arguments
/// - `available_from` - First day of the listing's availability window (may be in the past)
/// - `available_to` - Last day of the listing's availability window
/// - `intervals` - Confirmed booking intervals sorted ascending by start date
/// - `now` - Current instant
///
/// # Returns
/// - `Ok(Availability)` - Free ranges, `available` is `false` when there are none
/// - `Err(AvailabilityError)` - The intervals are unsorted, overlapping, or inverted
pub fn compute_availability(
    available_from: NaiveDate,
    available_to: NaiveDate,
    intervals: &[BookingInterval],
    now: DateTime<Utc>,
) -> Result<Availability, AvailabilityError> {
    validate_intervals(intervals)?;

    let Some(tomorrow) = now.date_naive().checked_add_days(Days::new(1)) else {
        return Ok(Availability::unavailable());
    };

    if tomorrow > available_to {
        return Ok(Availability::unavailable());
    }

    let mut cursor = available_from.max(tomorrow);
    let mut ranges = Vec::new();

    for interval in intervals {
        // Bookings stored beyond the window end still close the gap at the window edge.
        let gap_end = interval.start_date.min(available_to);
        if gap_end > cursor {
            ranges.push(FreeRange {
                start: cursor,
                end: gap_end,
            });
        }
        cursor = cursor.max(interval.end_date);
    }

    if cursor < available_to {
        ranges.push(FreeRange {
            start: cursor,
            end: available_to,
        });
    }

    if ranges.is_empty() {
        return Ok(Availability::unavailable());
    }

    Ok(Availability {
        available: true,
        ranges,
    })
}

fn validate_intervals(intervals: &[BookingInterval]) -> Result<(), AvailabilityError> {
    let mut previous: Option<&BookingInterval> = None;

    for interval in intervals {
        if interval.end_date < interval.start_date {
            return Err(AvailabilityError::InvertedInterval {
                start: interval.start_date,
                end: interval.end_date,
            });
        }

        if let Some(previous) = previous {
            if interval.start_date < previous.start_date {
                return Err(AvailabilityError::Unsorted {
                    previous_start: previous.start_date,
                    start: interval.start_date,
                });
            }
            if interval.start_date < previous.end_date {
                return Err(AvailabilityError::Overlapping {
                    previous_end: previous.end_date,
                    start: interval.start_date,
                });
            }
        }

        previous = Some(interval);
    }

    Ok(())
}
