//! Booking factory for creating test bookings in any status.

use crate::factory::helpers::days_from_today;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings.
///
/// Writes rows directly, bypassing the overlap and date checks of the booking
/// service, so tests can set up any state including past stays.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    accommodation_id: i32,
    guest_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    guests: i32,
    total_price: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - dates: 7 to 10 days from today
    /// - guests: `2`
    /// - total_price: `30_000`
    /// - status: `"pending"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, accommodation_id: i32, guest_id: i32) -> Self {
        Self {
            db,
            accommodation_id,
            guest_id,
            start_date: days_from_today(7),
            end_date: days_from_today(10),
            guests: 2,
            total_price: 30_000,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Sets the stored status string (`pending`, `confirmed`, `cancelled`, `completed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            accommodation_id: ActiveValue::Set(self.accommodation_id),
            guest_id: ActiveValue::Set(self.guest_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            guests: ActiveValue::Set(self.guests),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default dates.
pub async fn create_booking(
    db: &DatabaseConnection,
    accommodation_id: i32,
    guest_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, accommodation_id, guest_id)
        .build()
        .await
}

/// Creates a confirmed booking for the given dates.
pub async fn create_confirmed_booking(
    db: &DatabaseConnection,
    accommodation_id: i32,
    guest_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, accommodation_id, guest_id)
        .dates(start_date, end_date)
        .status("confirmed")
        .build()
        .await
}
