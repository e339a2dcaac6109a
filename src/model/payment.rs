use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub booking_id: i32,
    pub amount: i64,
    pub currency: String,
    pub provider_reference: Option<String>,
    /// One of `succeeded`, `failed` or `refunded`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful charge: the now confirmed booking and its payment.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingPaymentDto {
    pub booking: crate::model::booking::BookingDto,
    pub payment: PaymentDto,
}
