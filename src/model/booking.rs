use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub accommodation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
    pub guests: i32,
    /// Total price in minor currency units.
    pub total_price: i64,
    /// One of `pending`, `confirmed`, `cancelled` or `completed`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub accommodation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: i32,
}
